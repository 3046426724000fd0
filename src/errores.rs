//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use chrono::NaiveDate;
use excelstream::ExcelError;
use std::{fmt, io};

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeConfiguracion(ErrorConfiguracion),
    ErrorDeEscritura(ErrorEscritura),
}

impl From<ErrorConfiguracion> for Error {
    fn from(err: ErrorConfiguracion) -> Self {
        Error::ErrorDeConfiguracion(err)
    }
}

impl From<ErrorEscritura> for Error {
    fn from(err: ErrorEscritura) -> Self {
        Error::ErrorDeEscritura(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ErrorDeConfiguracion(e) => write!(f, "configuracion invalida: {}", e),
            Error::ErrorDeEscritura(e) => write!(f, "no se pudo escribir la planilla: {}", e),
        }
    }
}

impl std::error::Error for Error {}

/// Enumerativo que define los errores de una configuracion que no
/// permite generar datos con sentido. Se detectan antes de generar nada
#[derive(Debug, PartialEq)]
pub enum ErrorConfiguracion {
    SinCategorias,
    SinCiudades,
    RangoFechasVacio { inicio: NaiveDate, fin: NaiveDate },
    VentasSinInventario,
}

impl fmt::Display for ErrorConfiguracion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorConfiguracion::SinCategorias => write!(f, "la lista de categorias esta vacia"),
            ErrorConfiguracion::SinCiudades => write!(f, "la lista de ciudades esta vacia"),
            ErrorConfiguracion::RangoFechasVacio { inicio, fin } => {
                write!(f, "el rango de fechas {} - {} esta vacio", inicio, fin)
            }
            ErrorConfiguracion::VentasSinInventario => {
                write!(f, "se pidieron ventas pero el inventario no tiene productos")
            }
        }
    }
}

impl std::error::Error for ErrorConfiguracion {}

/// Enumerativo que define los errores que pueden darse al
/// escribir el archivo de salida
#[derive(Debug)]
pub enum ErrorEscritura {
    Archivo(io::Error),
    Planilla(String),
}

impl From<io::Error> for ErrorEscritura {
    fn from(err: io::Error) -> Self {
        ErrorEscritura::Archivo(err)
    }
}

impl From<ExcelError> for ErrorEscritura {
    fn from(err: ExcelError) -> Self {
        match err {
            ExcelError::IoError(e) => ErrorEscritura::Archivo(e),
            otro => ErrorEscritura::Planilla(otro.to_string()),
        }
    }
}

impl fmt::Display for ErrorEscritura {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorEscritura::Archivo(e) => write!(f, "error de archivo: {}", e),
            ErrorEscritura::Planilla(e) => write!(f, "error del escritor xlsx: {}", e),
        }
    }
}

impl std::error::Error for ErrorEscritura {}
