use std::process::ExitCode;

use chained_hash_table::logger::initialize_logger;
use chained_hash_table::{ChainedHashTable, TableConfig};
use log::{error, info};

fn main() -> ExitCode {
    initialize_logger();

    let table = TableConfig::from_env().and_then(ChainedHashTable::new);
    let mut ht = match table {
        Ok(ht) => ht,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "chained hash table demo: capacity={} hash={}",
        ht.capacity(),
        ht.hash_variant()
    );

    ht.insert(10, 100);
    ht.insert(20, 200);
    ht.insert(30, 300);
    ht.insert(40, 400);

    print!("{}", ht);

    ht.remove(20);
    print!("{}", ht);

    if let Some(val) = ht.search(10) {
        println!("Found 10 -> {}", val);
    }

    ExitCode::SUCCESS
}
