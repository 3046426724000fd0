use aliases::{CantidadVenta, RangoPrecio, RangoStock};

pub mod aliases;
pub mod config;
pub mod errores;
pub mod generators;
pub mod registros;
pub mod workbook;

/// Cantidad de productos del inventario por defecto
pub const CANTIDAD_INVENTARIO: usize = 200;

/// Cantidad de ventas generadas por defecto
pub const CANTIDAD_VENTAS: usize = 25000;

/// Categorias de productos por defecto
pub const CATEGORIAS: [&str; 3] = ["Odzież", "Obuwie", "Akcesoria"];

/// Ciudades con un local por defecto. Cada una tiene su columna de stock
pub const CIUDADES: [&str; 5] = ["Warszawa", "Wrocław", "Gdańsk", "Poznań", "Kraków"];

/// Nombre del archivo generado cuando no se indica otro
pub const ARCHIVO_SALIDA: &str = "inventory_and_sales_data.xlsx";

/// Rango del precio de compra de un producto
pub const RANGO_PRECIO_COMPRA: RangoPrecio = (10.0, 500.0);

/// Rango del precio de venta de un producto
pub const RANGO_PRECIO_VENTA: RangoPrecio = (10.0, 700.0);

/// Rango del stock de un producto en cada local
pub const RANGO_STOCK_LOCAL: RangoStock = (0, 50);

/// Rango del stock de un producto en el deposito central
pub const RANGO_STOCK_DEPOSITO: RangoStock = (0, 200);

/// Rango de unidades vendidas en una venta
pub const RANGO_CANTIDAD_VENTA: (CantidadVenta, CantidadVenta) = (1, 10);
