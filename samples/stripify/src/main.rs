mod cli;

use clap::Parser;

/// The 20 faces of an icosahedron over vertices 0-11.
const ICOSAHEDRON: [[u32; 3]; 20] = [
    [0, 1, 2],
    [3, 1, 0],
    [4, 1, 3],
    [5, 1, 4],
    [2, 1, 5],
    [6, 7, 8],
    [8, 7, 9],
    [9, 7, 10],
    [10, 7, 11],
    [11, 7, 6],
    [0, 2, 6],
    [2, 5, 11],
    [5, 4, 10],
    [4, 3, 9],
    [3, 0, 8],
    [8, 0, 6],
    [9, 3, 8],
    [10, 4, 9],
    [11, 5, 10],
    [6, 2, 11],
];

pub fn main() {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);

    tracing::info!("searching for a triangle strip covering an icosahedron");
    let strip = match tristrip::find_strip(ICOSAHEDRON) {
        Ok(strip) => strip,
        Err(e) => {
            tracing::error!(%e, "no strip exists for this fragment");
            std::process::exit(1);
        }
    };

    println!("triangle strip: {:?}", strip.vertices());
    println!("strip length: {}", strip.len());
}
