use std::env;
use std::process;

use drush_make::Manifest;

const EXAMPLE: &str = "\
; Sample distribution
core = 7.x
api = 2

projects[views] = 3.1
projects[embed][version] = 1.2
projects[drupal_extras][type] = module
projects[drupal_extras][download][type] = git
projects[drupal_extras][download][branch] = 7.x-2.x
projects[draggableviews][type] = module
projects[draggableviews][download][type] = git
projects[draggableviews][download][revision] = 9677bc18b7255e13c33ac3cca48732b855c6817d
projects[nodequeue][subdir] = contrib
projects[nodequeue][version] = 2.0-alpha1
projects[nodequeue][patch][] = \"http://drupal.org/files/issues/1023606-qid-to-name-6.patch\"
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("DRUSH_MAKE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .init();

    let parsed = match env::args().nth(1) {
        Some(path) => Manifest::parse_file(path),
        None => Manifest::parse(EXAMPLE),
    };
    let manifest = match parsed {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    println!("=== Components ===");
    for c in &manifest {
        println!("{c}");
        if let Some(ref t) = c.download_type {
            println!("  download:  {t}");
        }
        if let Some(ref r) = c.revision {
            println!("  revision:  {r}");
        }
        for patch in &c.patches {
            println!("  patch:     {patch}");
        }
    }

    println!("\n=== Lookup: embed ===");
    match manifest.lookup_by_name("embed") {
        Some(c) => println!("{c}"),
        None => println!("(not declared)"),
    }

    println!("\n=== Prefix: drupal ===");
    for c in manifest.list_by_prefix("drupal") {
        println!("{}", c.name);
    }
}
