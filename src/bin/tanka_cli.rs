//! CLI tool for tankaview - decodes share URLs into composition JSON
//!
//! Usage:
//!   tanka_cli <share-url-or-query>              # Output JSON to stdout
//!   tanka_cli <share-url-or-query> -o out.json  # Output JSON to file
//!   tanka_cli <share-url-or-query> -u           # Output canonical share URL

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use tankaview::composition::Composition;
use tankaview::{query, share};
use url::Url;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tanka_cli <share-url-or-query> [-o output.json | -u]");
        std::process::exit(1);
    }

    let input = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };
    let as_url = args.len() > 2 && args[2] == "-u";

    // Decode onto the defaults; absent keys keep default values and
    // invalid catalog identifiers fall back to the default entries.
    let mut composition = Composition::default();
    query::decode(&share::extract_query(input)).apply_to(&mut composition);

    if as_url {
        // Re-encode canonically, keeping the input's origin and path when
        // it was an absolute URL.
        match Url::parse(input) {
            Ok(url) => println!(
                "{}",
                share::share_url(&url.origin().ascii_serialization(), url.path(), &composition)
            ),
            Err(_) => println!("?{}", query::encode_full(&composition)),
        }
        return;
    }

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&composition) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
