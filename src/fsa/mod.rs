pub mod alphabet;
pub mod io;
pub mod machine;
pub mod store;

pub use alphabet::{ALPHABET, ALPHABET_LEN, Alphabet};
pub use io::{load_store_json, load_store_json_bytes, save_store_json, write_store_json};
pub use machine::{Insertion, Machine, Outcome};
pub use store::{Cell, Marker, Store, SymbolIndex};
