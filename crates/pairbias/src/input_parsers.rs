use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::Result;
use paste::paste;
use pb_bias::StructureIndex;

// ============================================================
//  Structure file (.gro) parser
// ============================================================

/// Index all atom lines of a .gro-like structure file.
pub fn read_structure<R: BufRead>(reader: R) -> Result<StructureIndex> {
    Ok(StructureIndex::from_reader(reader)?)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let path = path.as_ref();
                let file = File::open(path)
                    .map_err(|e| anyhow::anyhow!("Cannot open {}: {}", path.display(), e))?;
                $base(BufReader::new(file))
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

define_input_variants!(read_structure, Result<StructureIndex>);

// ============================================================
//  Unit tests
// ============================================================
