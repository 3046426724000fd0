//! Este modulo vuelca las tablas generadas a un archivo xlsx, una hoja
//! por tabla, con una fila de encabezados y sin columna de indice.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use excelstream::writer::{ExcelWriter, ExcelWriterBuilder};

use crate::config::NombresHojas;
use crate::errores::ErrorEscritura;
use crate::registros::{Tabla, TablaInventario, TablaVentas};

/// Verifica que exista el directorio donde se va a crear el archivo
fn verificar_destino(ruta: &Path) -> io::Result<()> {
    match ruta.parent() {
        Some(directorio) if !directorio.as_os_str().is_empty() => {
            if fs::metadata(directorio)?.is_dir() {
                Ok(())
            } else {
                Err(io::Error::new(
                    ErrorKind::NotFound,
                    format!("{} no es un directorio", directorio.display()),
                ))
            }
        }
        _ => Ok(()),
    }
}

/// Escribe los encabezados y todas las filas de una tabla en la hoja actual
fn escribir_tabla(writer: &mut ExcelWriter, tabla: &dyn Tabla) -> Result<(), ErrorEscritura> {
    writer.write_header(&tabla.encabezados())?;
    for fila in tabla.filas() {
        writer.write_row_typed(&fila)?;
    }
    Ok(())
}

/// Crea el archivo en `ruta` con el inventario en la primera hoja y las
/// ventas en la segunda. El escritor es dueño del archivo, y lo cierra al
/// salir de esta funcion tanto si se guardo como si hubo un error
pub fn write_workbook(
    inventario: &TablaInventario,
    ventas: &TablaVentas,
    ruta: &Path,
    nombres: &NombresHojas,
) -> Result<(), ErrorEscritura> {
    verificar_destino(ruta)?;

    let mut writer = ExcelWriterBuilder::new(ruta)
        .with_sheet_name(&nombres.inventario)
        .build()?;
    escribir_tabla(&mut writer, inventario)?;

    writer.add_sheet(&nombres.ventas)?;
    escribir_tabla(&mut writer, ventas)?;

    writer.save()?;
    Ok(())
}
