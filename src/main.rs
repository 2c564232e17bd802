// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Renders the full set at 5120x2880 with 20x supersampling and
//! zebra interior shading, and writes it to `mandelbrot.bmp`.  There
//! are no options; see the `mandel` binary for those.

extern crate env_logger;
extern crate mandelbrot;

use env_logger::Env;
use mandelbrot::{render, utils, RenderConfig, RenderError};

const OUTPUT: &str = "mandelbrot.bmp";

fn run() -> Result<(), RenderError> {
    utils::self_check()?;
    let config = RenderConfig::default();

    println!("starting render");
    let bitmap = render(&config)?;
    println!("\x1b[1K\rfinished");

    bitmap.write(OUTPUT)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
