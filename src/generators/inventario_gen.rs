//! Este modulo permite generar la tabla de inventario de forma aleatoria.
//! Los productos se numeran en orden desde 1, y el resto de sus campos
//! se sortean de manera independiente para cada producto.

use rand::{seq::SliceRandom, Rng};

use crate::aliases::{CantidadStock, NumeroProducto, Precio, RangoPrecio, RangoStock};
use crate::errores::ErrorConfiguracion;
use crate::registros::{formatear_id_producto, RegistroInventario, TablaInventario};
use crate::{RANGO_PRECIO_COMPRA, RANGO_PRECIO_VENTA, RANGO_STOCK_DEPOSITO, RANGO_STOCK_LOCAL};

/// Redondea un precio a centavos
fn redondear_precio(precio: Precio) -> Precio {
    (precio * 100.0).round() / 100.0
}

fn precio_aleatorio<R: Rng + ?Sized>(rng: &mut R, rango: RangoPrecio) -> Precio {
    redondear_precio(rng.gen_range(rango.0..=rango.1))
}

fn stock_aleatorio<R: Rng + ?Sized>(rng: &mut R, rango: RangoStock) -> CantidadStock {
    rng.gen_range(rango.0..=rango.1)
}

/// Genera un producto con el numero dado. `generate_inventory` ya
/// verifico que haya categorias
fn generar_producto<R: Rng + ?Sized>(
    rng: &mut R,
    numero: NumeroProducto,
    categorias: &[String],
    ciudades: &[String],
) -> RegistroInventario {
    let categoria = categorias.choose(rng).cloned().unwrap_or_default();
    let precio_compra = precio_aleatorio(rng, RANGO_PRECIO_COMPRA);
    let precio_venta = precio_aleatorio(rng, RANGO_PRECIO_VENTA);
    let stock_locales = ciudades
        .iter()
        .map(|_| stock_aleatorio(rng, RANGO_STOCK_LOCAL))
        .collect();
    let stock_deposito = stock_aleatorio(rng, RANGO_STOCK_DEPOSITO);

    RegistroInventario {
        id_producto: formatear_id_producto(numero),
        nombre: format!("Produkt_{}", numero),
        categoria,
        precio_compra,
        precio_venta,
        stock_locales,
        stock_deposito,
    }
}

/// Genera una tabla de inventario con `cantidad` productos, numerados
/// desde 1. Con cantidad cero se obtiene una tabla vacia. Falla si no hay
/// categorias para sortear o ciudades con las que armar las columnas de stock
pub fn generate_inventory<R: Rng + ?Sized>(
    rng: &mut R,
    cantidad: usize,
    categorias: &[String],
    ciudades: &[String],
) -> Result<TablaInventario, ErrorConfiguracion> {
    if categorias.is_empty() {
        return Err(ErrorConfiguracion::SinCategorias);
    }
    if ciudades.is_empty() {
        return Err(ErrorConfiguracion::SinCiudades);
    }

    let registros = (1..=cantidad)
        .map(|numero| generar_producto(rng, numero, categorias, ciudades))
        .collect();

    Ok(TablaInventario::new(ciudades.to_vec(), registros))
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    use crate::{CATEGORIAS, CIUDADES};

    fn listas() -> (Vec<String>, Vec<String>) {
        (
            CATEGORIAS.iter().map(|c| c.to_string()).collect(),
            CIUDADES.iter().map(|c| c.to_string()).collect(),
        )
    }

    fn tiene_a_lo_sumo_dos_decimales(precio: Precio) -> bool {
        let centavos = precio * 100.0;
        (centavos - centavos.round()).abs() < 1e-6
    }

    #[test]
    fn genera_ids_consecutivos_sin_huecos() {
        let (categorias, ciudades) = listas();
        let mut rng = StdRng::seed_from_u64(42);
        let tabla = generate_inventory(&mut rng, 200, &categorias, &ciudades).unwrap();

        assert_eq!(tabla.len(), 200);
        let ids: HashSet<&str> = tabla
            .registros()
            .iter()
            .map(|r| r.id_producto.as_str())
            .collect();
        assert_eq!(ids.len(), 200);
        for (i, registro) in tabla.registros().iter().enumerate() {
            assert_eq!(registro.id_producto, format!("P{:04}", i + 1));
            assert_eq!(registro.nombre, format!("Produkt_{}", i + 1));
        }
    }

    #[test]
    fn cantidad_cero_da_tabla_vacia() {
        let (categorias, ciudades) = listas();
        let mut rng = StdRng::seed_from_u64(0);
        let tabla = generate_inventory(&mut rng, 0, &categorias, &ciudades).unwrap();

        assert!(tabla.is_empty());
        assert_eq!(tabla.ciudades().len(), 5);
    }

    #[test]
    fn precios_dentro_de_rango_y_redondeados() {
        let (categorias, ciudades) = listas();
        let mut rng = StdRng::seed_from_u64(3);
        let tabla = generate_inventory(&mut rng, 1000, &categorias, &ciudades).unwrap();

        for registro in tabla.registros() {
            assert!((10.0..=500.0).contains(&registro.precio_compra));
            assert!((10.0..=700.0).contains(&registro.precio_venta));
            assert!(tiene_a_lo_sumo_dos_decimales(registro.precio_compra));
            assert!(tiene_a_lo_sumo_dos_decimales(registro.precio_venta));
        }
    }

    #[test]
    fn stock_dentro_de_rango_y_una_columna_por_ciudad() {
        let (categorias, ciudades) = listas();
        let mut rng = StdRng::seed_from_u64(5);
        let tabla = generate_inventory(&mut rng, 1000, &categorias, &ciudades).unwrap();

        for registro in tabla.registros() {
            assert_eq!(registro.stock_locales.len(), ciudades.len());
            assert!(registro.stock_locales.iter().all(|s| *s <= 50));
            assert!(registro.stock_deposito <= 200);
            assert!(categorias.contains(&registro.categoria));
        }
    }

    #[test]
    fn misma_semilla_mismo_inventario() {
        let (categorias, ciudades) = listas();
        let primera = generate_inventory(&mut StdRng::seed_from_u64(9), 50, &categorias, &ciudades).unwrap();
        let segunda = generate_inventory(&mut StdRng::seed_from_u64(9), 50, &categorias, &ciudades).unwrap();

        assert_eq!(primera, segunda);
    }

    #[test]
    fn redondeo_a_centavos() {
        assert_eq!(redondear_precio(10.005_1), 10.01);
        assert_eq!(redondear_precio(499.994), 499.99);
        assert_eq!(redondear_precio(10.0), 10.0);
    }

    #[test]
    fn sin_categorias_o_ciudades_falla() {
        let (categorias, ciudades) = listas();
        let mut rng = StdRng::seed_from_u64(6);

        assert_eq!(
            generate_inventory(&mut rng, 5, &[], &ciudades),
            Err(ErrorConfiguracion::SinCategorias)
        );
        assert_eq!(
            generate_inventory(&mut rng, 5, &categorias, &[]),
            Err(ErrorConfiguracion::SinCiudades)
        );
    }
}
