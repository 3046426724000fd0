//! Este modulo define los registros generados (productos del inventario y
//! ventas) y las tablas que los agrupan para ser volcadas a una planilla

use std::fmt;

use chrono::NaiveDate;
use colored::Colorize;
use excelstream::types::CellValue;

use crate::aliases::{CantidadStock, CantidadVenta, NumeroProducto, Precio};

pub const COLUMNA_ID_PRODUCTO: &str = "id produktu";
pub const COLUMNA_NOMBRE_PRODUCTO: &str = "nazwa produktu";
pub const COLUMNA_CATEGORIA: &str = "kategoria";
pub const COLUMNA_PRECIO_COMPRA: &str = "cena zakupu";
pub const COLUMNA_PRECIO_VENTA: &str = "cena sprzedaży";
pub const PREFIJO_COLUMNA_STOCK_LOCAL: &str = "stan zapasu Sklep";
pub const COLUMNA_STOCK_DEPOSITO: &str = "stan zapasu Magazyn";
pub const COLUMNA_FECHA: &str = "data";
pub const COLUMNA_CANTIDAD: &str = "ilosc";
pub const COLUMNA_LOCAL: &str = "sklep";

/// Formato con el que se escriben las fechas de las ventas
pub const FORMATO_FECHA: &str = "%d.%m.%Y";

/// Convierte un numero de producto en su id, por ejemplo 7 en `P0007`
pub fn formatear_id_producto(numero: NumeroProducto) -> String {
    format!("P{:04}", numero)
}

/// Una tabla sabe dar sus encabezados y sus filas como celdas de planilla
pub trait Tabla {
    fn encabezados(&self) -> Vec<String>;
    fn filas(&self) -> Box<dyn Iterator<Item = Vec<CellValue>> + '_>;
    fn cantidad_filas(&self) -> usize;
}

/// Un producto del inventario, con su stock en cada local y en el deposito
#[derive(Debug, Clone, PartialEq)]
pub struct RegistroInventario {
    pub id_producto: String,
    pub nombre: String,
    pub categoria: String,
    pub precio_compra: Precio,
    pub precio_venta: Precio,
    /// Stock por local, en el mismo orden que las ciudades de la tabla
    pub stock_locales: Vec<CantidadStock>,
    pub stock_deposito: CantidadStock,
}

impl RegistroInventario {
    fn como_celdas(&self) -> Vec<CellValue> {
        let mut celdas = vec![
            CellValue::String(self.id_producto.clone()),
            CellValue::String(self.nombre.clone()),
            CellValue::String(self.categoria.clone()),
            CellValue::Float(self.precio_compra),
            CellValue::Float(self.precio_venta),
        ];
        celdas.extend(
            self.stock_locales
                .iter()
                .map(|stock| CellValue::Int(i64::from(*stock))),
        );
        celdas.push(CellValue::Int(i64::from(self.stock_deposito)));
        celdas
    }
}

impl fmt::Display for RegistroInventario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "producto {} ({}) a {} ",
            self.id_producto.blue(),
            self.categoria,
            self.precio_venta.to_string().blue()
        )?;
        write!(f, "con {} en deposito", self.stock_deposito.to_string().blue())
    }
}

/// Una venta de un producto en un local
#[derive(Debug, Clone, PartialEq)]
pub struct RegistroVenta {
    pub id_producto: String,
    pub fecha: NaiveDate,
    pub cantidad: CantidadVenta,
    pub local: String,
}

impl RegistroVenta {
    /// Fecha de la venta como `DD.MM.YYYY`
    pub fn fecha_formateada(&self) -> String {
        self.fecha.format(FORMATO_FECHA).to_string()
    }

    fn como_celdas(&self) -> Vec<CellValue> {
        vec![
            CellValue::String(self.id_producto.clone()),
            CellValue::String(self.fecha_formateada()),
            CellValue::Int(i64::from(self.cantidad)),
            CellValue::String(self.local.clone()),
        ]
    }
}

impl fmt::Display for RegistroVenta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "venta de {} unidades ",
            self.cantidad.to_string().blue()
        )?;
        write!(
            f,
            "del producto {} en {} el {}",
            self.id_producto.blue(),
            self.local,
            self.fecha_formateada()
        )
    }
}

/// Tabla de inventario. Guarda las ciudades para poder nombrar
/// una columna de stock por cada una
#[derive(Debug, Clone, PartialEq)]
pub struct TablaInventario {
    ciudades: Vec<String>,
    registros: Vec<RegistroInventario>,
}

impl TablaInventario {
    pub fn new(ciudades: Vec<String>, registros: Vec<RegistroInventario>) -> Self {
        Self {
            ciudades,
            registros,
        }
    }

    pub fn registros(&self) -> &[RegistroInventario] {
        &self.registros
    }

    pub fn ciudades(&self) -> &[String] {
        &self.ciudades
    }

    pub fn len(&self) -> usize {
        self.registros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registros.is_empty()
    }
}

impl Tabla for TablaInventario {
    fn encabezados(&self) -> Vec<String> {
        let mut encabezados: Vec<String> = [
            COLUMNA_ID_PRODUCTO,
            COLUMNA_NOMBRE_PRODUCTO,
            COLUMNA_CATEGORIA,
            COLUMNA_PRECIO_COMPRA,
            COLUMNA_PRECIO_VENTA,
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();
        encabezados.extend(
            self.ciudades
                .iter()
                .map(|ciudad| format!("{} {}", PREFIJO_COLUMNA_STOCK_LOCAL, ciudad)),
        );
        encabezados.push(COLUMNA_STOCK_DEPOSITO.to_string());
        encabezados
    }

    fn filas(&self) -> Box<dyn Iterator<Item = Vec<CellValue>> + '_> {
        Box::new(self.registros.iter().map(RegistroInventario::como_celdas))
    }

    fn cantidad_filas(&self) -> usize {
        self.len()
    }
}

/// Tabla de ventas, en el orden en que fueron generadas
#[derive(Debug, Clone, PartialEq)]
pub struct TablaVentas {
    registros: Vec<RegistroVenta>,
}

impl TablaVentas {
    pub fn new(registros: Vec<RegistroVenta>) -> Self {
        Self { registros }
    }

    pub fn registros(&self) -> &[RegistroVenta] {
        &self.registros
    }

    pub fn len(&self) -> usize {
        self.registros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registros.is_empty()
    }
}

impl Tabla for TablaVentas {
    fn encabezados(&self) -> Vec<String> {
        [COLUMNA_ID_PRODUCTO, COLUMNA_FECHA, COLUMNA_CANTIDAD, COLUMNA_LOCAL]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    fn filas(&self) -> Box<dyn Iterator<Item = Vec<CellValue>> + '_> {
        Box::new(self.registros.iter().map(RegistroVenta::como_celdas))
    }

    fn cantidad_filas(&self) -> usize {
        self.len()
    }
}
