//! Este modulo reune a los generadores de inventario y de ventas, y define
//! el generador que los ejecuta en orden y escribe el archivo resultante.

pub mod inventario_gen;
pub mod ventas_gen;

use std::path::Path;

use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Configuracion;
use crate::errores::Error;
use crate::registros::{TablaInventario, TablaVentas};
use crate::workbook::write_workbook;

use inventario_gen::generate_inventory;
use ventas_gen::generate_sales;

/// Generador de datos. Todas las tiradas salen de la misma fuente
/// aleatoria, que se siembra con la semilla de la configuracion si la hay
pub struct Generador {
    config: Configuracion,
    rng: StdRng,
}

impl Generador {
    /// Crea un generador, validando la configuracion antes de generar nada
    pub fn new(config: Configuracion) -> Result<Self, Error> {
        config.validar()?;
        let rng = match config.semilla {
            Some(semilla) => StdRng::seed_from_u64(semilla),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &Configuracion {
        &self.config
    }

    /// Genera la tabla de inventario con la cantidad configurada
    pub fn generar_inventario(&mut self) -> Result<TablaInventario, Error> {
        let inventario = generate_inventory(
            &mut self.rng,
            self.config.cantidad_inventario,
            &self.config.categorias,
            &self.config.ciudades,
        )?;
        println!(
            "Se generaron {} productos de inventario",
            inventario.len().to_string().blue()
        );
        Ok(inventario)
    }

    /// Genera la tabla de ventas. Los productos vendidos se sortean entre
    /// los productos del inventario dado
    pub fn generar_ventas(&mut self, inventario: &TablaInventario) -> Result<TablaVentas, Error> {
        let ventas = generate_sales(
            &mut self.rng,
            self.config.cantidad_ventas,
            inventario.len(),
            &self.config.fechas,
            &self.config.ciudades,
        )?;
        println!(
            "Se generaron {} ventas entre {} y {}",
            ventas.len().to_string().blue(),
            self.config.fechas.inicio,
            self.config.fechas.fin
        );
        Ok(ventas)
    }

    /// Genera ambas tablas y las escribe en el archivo dado
    pub fn crear_archivo(&mut self, ruta: &Path) -> Result<(), Error> {
        let inventario = self.generar_inventario()?;
        let ventas = self.generar_ventas(&inventario)?;

        write_workbook(&inventario, &ventas, ruta, &self.config.nombres_hojas())?;

        println!(
            "{} created successfully.",
            ruta.display().to_string().green()
        );
        Ok(())
    }
}
