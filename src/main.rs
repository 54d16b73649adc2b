use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use urlkit::{Component, Url};

const USAGE: &str = "usage: urlkit <url> [reference...]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let url = match Url::parse(&input) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("✗ {input}: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{url}");
    for component in Component::ALL {
        println!("  {:<9} {}", format!("{component:?}:"), url.component(component));
    }

    println!("  segments: {:?}", url.path().segments());
    for (key, value) in url.query() {
        println!("  pair:     {key:?} = {value:?}");
    }
    println!("  absolute: {}", url.is_absolute());
    println!("  secure:   {}", url.is_secure());

    let mut canonical = url.clone();
    canonical.path_mut().canonify();
    println!("  canonical: {canonical}");

    let mut status = ExitCode::SUCCESS;
    for reference in args {
        match url.join(&reference) {
            Ok(joined) => println!("{reference} → {joined}"),
            Err(e) => {
                eprintln!("✗ {reference}: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
