//! Este modulo permite generar la tabla de ventas de forma aleatoria.
//! Cada venta sortea un producto, un dia de la ventana de fechas, una
//! cantidad y el local donde se hizo.

use rand::{seq::SliceRandom, Rng};

use crate::aliases::NumeroProducto;
use crate::config::RangoFechas;
use crate::errores::ErrorConfiguracion;
use crate::registros::{formatear_id_producto, RegistroVenta, TablaVentas};
use crate::RANGO_CANTIDAD_VENTA;

fn generar_venta<R: Rng + ?Sized>(
    rng: &mut R,
    tope_ids: NumeroProducto,
    fechas: &RangoFechas,
    ciudades: &[String],
) -> RegistroVenta {
    let numero = rng.gen_range(1..=tope_ids);
    let fecha = fechas.fecha_aleatoria(rng);
    let cantidad = rng.gen_range(RANGO_CANTIDAD_VENTA.0..=RANGO_CANTIDAD_VENTA.1);
    // `generate_sales` ya verifico que haya ciudades
    let local = ciudades.choose(rng).cloned().unwrap_or_default();

    RegistroVenta {
        id_producto: formatear_id_producto(numero),
        fecha,
        cantidad,
        local,
    }
}

/// Genera `cantidad` ventas. El producto de cada venta se sortea entre
/// 1 y `tope_ids`, sin mirar el inventario, por lo que el tope tiene que
/// ser la cantidad de productos generados. Falla si hay ventas que generar
/// y no hay productos, ciudades o dias de donde sortearlas
pub fn generate_sales<R: Rng + ?Sized>(
    rng: &mut R,
    cantidad: usize,
    tope_ids: NumeroProducto,
    fechas: &RangoFechas,
    ciudades: &[String],
) -> Result<TablaVentas, ErrorConfiguracion> {
    if ciudades.is_empty() {
        return Err(ErrorConfiguracion::SinCiudades);
    }
    if fechas.esta_vacio() {
        return Err(ErrorConfiguracion::RangoFechasVacio {
            inicio: fechas.inicio,
            fin: fechas.fin,
        });
    }
    if cantidad > 0 && tope_ids == 0 {
        return Err(ErrorConfiguracion::VentasSinInventario);
    }

    let registros = (0..cantidad)
        .map(|_| generar_venta(rng, tope_ids, fechas, ciudades))
        .collect();

    Ok(TablaVentas::new(registros))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::CIUDADES;

    fn ciudades() -> Vec<String> {
        CIUDADES.iter().map(|c| c.to_string()).collect()
    }

    fn es_fecha_con_puntos(texto: &str) -> bool {
        let partes: Vec<&str> = texto.split('.').collect();
        partes.len() == 3
            && partes[0].len() == 2
            && partes[1].len() == 2
            && partes[2].len() == 4
            && partes.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn genera_la_cantidad_pedida() {
        let mut rng = StdRng::seed_from_u64(1);
        let tabla = generate_sales(&mut rng, 25000, 200, &RangoFechas::default(), &ciudades()).unwrap();
        assert_eq!(tabla.len(), 25000);

        let vacia = generate_sales(&mut rng, 0, 200, &RangoFechas::default(), &ciudades()).unwrap();
        assert!(vacia.is_empty());
    }

    #[test]
    fn fechas_dentro_de_la_ventana_y_bien_formateadas() {
        let fechas = RangoFechas::default();
        let mut rng = StdRng::seed_from_u64(2);
        let tabla = generate_sales(&mut rng, 2000, 200, &fechas, &ciudades()).unwrap();

        for venta in tabla.registros() {
            assert!(fechas.contiene(venta.fecha));
            let texto = venta.fecha_formateada();
            assert!(es_fecha_con_puntos(&texto), "fecha mal formada: {}", texto);
            assert_eq!(
                NaiveDate::parse_from_str(&texto, "%d.%m.%Y").unwrap(),
                venta.fecha
            );
        }
    }

    #[test]
    fn cantidades_locales_y_productos_validos() {
        let ciudades = ciudades();
        let mut rng = StdRng::seed_from_u64(3);
        let tabla = generate_sales(&mut rng, 2000, 5, &RangoFechas::default(), &ciudades).unwrap();

        let ids_validos: Vec<String> = (1..=5).map(formatear_id_producto).collect();
        for venta in tabla.registros() {
            assert!((1..=10).contains(&venta.cantidad));
            assert!(ciudades.contains(&venta.local));
            assert!(ids_validos.contains(&venta.id_producto));
        }
    }

    #[test]
    fn ventana_de_un_dia() {
        let dia = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let tabla = generate_sales(&mut rng, 100, 10, &RangoFechas::new(dia, dia), &ciudades()).unwrap();

        assert!(tabla.registros().iter().all(|v| v.fecha_formateada() == "15.10.2024"));
    }

    #[test]
    fn ventas_sin_productos_ciudades_o_dias_fallan() {
        let mut rng = StdRng::seed_from_u64(5);
        let fechas = RangoFechas::default();

        assert_eq!(
            generate_sales(&mut rng, 10, 0, &fechas, &ciudades()),
            Err(ErrorConfiguracion::VentasSinInventario)
        );
        assert_eq!(
            generate_sales(&mut rng, 10, 5, &fechas, &[]),
            Err(ErrorConfiguracion::SinCiudades)
        );

        let invertido = RangoFechas::new(fechas.fin, fechas.inicio);
        assert_eq!(
            generate_sales(&mut rng, 10, 5, &invertido, &ciudades()),
            Err(ErrorConfiguracion::RangoFechasVacio {
                inicio: fechas.fin,
                fin: fechas.inicio,
            })
        );
    }

    #[test]
    fn sin_ventas_el_tope_cero_no_importa() {
        let mut rng = StdRng::seed_from_u64(6);
        let tabla = generate_sales(&mut rng, 0, 0, &RangoFechas::default(), &ciudades()).unwrap();
        assert!(tabla.is_empty());
    }

    #[test]
    fn tope_mayor_a_u32_no_se_trunca() {
        let tope = u32::MAX as NumeroProducto * 4;
        let mut rng = StdRng::seed_from_u64(7);
        let tabla = generate_sales(&mut rng, 500, tope, &RangoFechas::default(), &ciudades()).unwrap();

        let numeros: Vec<NumeroProducto> = tabla
            .registros()
            .iter()
            .map(|v| v.id_producto[1..].parse().unwrap())
            .collect();
        assert!(numeros.iter().all(|n| (1..=tope).contains(n)));
        assert!(numeros.iter().any(|n| *n > u32::MAX as NumeroProducto));
    }
}
