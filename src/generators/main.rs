//! Genera un archivo xlsx con una hoja de inventario y una hoja de ventas
//! aleatorias. Recibe opcionalmente el nombre del archivo como argumento.

use std::path::Path;

use clap::Parser;
use generador_inventario::config::{Argumentos, Configuracion};
use generador_inventario::errores::Error;
use generador_inventario::generators::Generador;

fn main() -> Result<(), Error> {
    let args = Argumentos::parse();
    let mut generador = Generador::new(Configuracion::default())?;
    generador.crear_archivo(Path::new(&args.archivo))
}
