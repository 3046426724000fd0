//! Este modulo define la configuracion con la que se generan los datos:
//! cantidades de filas, categorias, ciudades y la ventana de fechas de
//! las ventas. Tambien define los argumentos del programa.

use chrono::{Days, NaiveDate};
use clap::Parser;
use rand::Rng;

use crate::errores::ErrorConfiguracion;
use crate::{ARCHIVO_SALIDA, CANTIDAD_INVENTARIO, CANTIDAD_VENTAS, CATEGORIAS, CIUDADES};

/// Rango cerrado de fechas, ambos extremos incluidos
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangoFechas {
    pub inicio: NaiveDate,
    pub fin: NaiveDate,
}

impl RangoFechas {
    pub fn new(inicio: NaiveDate, fin: NaiveDate) -> Self {
        Self { inicio, fin }
    }

    /// Un rango esta vacio cuando su inicio es posterior a su fin
    pub fn esta_vacio(&self) -> bool {
        self.inicio > self.fin
    }

    /// Cantidad de dias desde el inicio hasta el fin
    pub fn dias(&self) -> u64 {
        (self.fin - self.inicio).num_days().max(0) as u64
    }

    pub fn contiene(&self, fecha: NaiveDate) -> bool {
        self.inicio <= fecha && fecha <= self.fin
    }

    /// Elige un dia del rango de forma uniforme
    pub fn fecha_aleatoria<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let desplazamiento = rng.gen_range(0..=self.dias());
        self.inicio
            .checked_add_days(Days::new(desplazamiento))
            .unwrap_or(self.fin)
    }
}

impl Default for RangoFechas {
    fn default() -> Self {
        Self {
            inicio: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap_or_default(),
            fin: NaiveDate::from_ymd_opt(2024, 10, 31).unwrap_or_default(),
        }
    }
}

/// Nombres de las dos hojas del archivo de salida
#[derive(Debug, Clone, PartialEq)]
pub struct NombresHojas {
    pub inventario: String,
    pub ventas: String,
}

impl NombresHojas {
    /// Deriva los nombres de las hojas a partir de la ventana de fechas:
    /// el inventario se nombra por el ultimo dia y las ventas por el mes
    pub fn desde_rango(rango: &RangoFechas) -> Self {
        Self {
            inventario: format!("Stan zapasów {}", rango.fin.format("%Y.%m.%d")),
            ventas: format!("Sprzedaż za {}", rango.inicio.format("%Y.%m")),
        }
    }
}

/// Parametros con los que se construye un generador
#[derive(Debug, Clone, PartialEq)]
pub struct Configuracion {
    pub cantidad_inventario: usize,
    pub cantidad_ventas: usize,
    pub categorias: Vec<String>,
    pub ciudades: Vec<String>,
    pub fechas: RangoFechas,
    /// Semilla para obtener datos reproducibles. Sin ella cada ejecucion es distinta
    pub semilla: Option<u64>,
}

impl Configuracion {
    /// Crea una configuracion por defecto con las cantidades de filas dadas
    pub fn new(cantidad_inventario: usize, cantidad_ventas: usize) -> Self {
        Self {
            cantidad_inventario,
            cantidad_ventas,
            ..Self::default()
        }
    }

    pub fn con_semilla(mut self, semilla: u64) -> Self {
        self.semilla = Some(semilla);
        self
    }

    /// Verifica que la configuracion permita generar datos validos
    pub fn validar(&self) -> Result<(), ErrorConfiguracion> {
        if self.categorias.is_empty() {
            return Err(ErrorConfiguracion::SinCategorias);
        }
        if self.ciudades.is_empty() {
            return Err(ErrorConfiguracion::SinCiudades);
        }
        if self.fechas.esta_vacio() {
            return Err(ErrorConfiguracion::RangoFechasVacio {
                inicio: self.fechas.inicio,
                fin: self.fechas.fin,
            });
        }
        if self.cantidad_inventario == 0 && self.cantidad_ventas > 0 {
            return Err(ErrorConfiguracion::VentasSinInventario);
        }
        Ok(())
    }

    pub fn nombres_hojas(&self) -> NombresHojas {
        NombresHojas::desde_rango(&self.fechas)
    }
}

impl Default for Configuracion {
    fn default() -> Self {
        Self {
            cantidad_inventario: CANTIDAD_INVENTARIO,
            cantidad_ventas: CANTIDAD_VENTAS,
            categorias: CATEGORIAS.iter().map(|c| c.to_string()).collect(),
            ciudades: CIUDADES.iter().map(|c| c.to_string()).collect(),
            fechas: RangoFechas::default(),
            semilla: None,
        }
    }
}

/// Argumentos del programa. Solo se puede elegir el archivo de salida
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Argumentos {
    /// Archivo xlsx a generar
    #[arg(default_value = ARCHIVO_SALIDA)]
    pub archivo: String,
}
