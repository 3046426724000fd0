//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type NumeroProducto = usize;
pub type CantidadStock = u16;
pub type CantidadVenta = u8;
pub type Precio = f64;
pub type RangoStock = (CantidadStock, CantidadStock);
pub type RangoPrecio = (Precio, Precio);
