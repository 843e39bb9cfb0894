//! The snippets. Each module is independent of the others and exposes its toy
//! types, a `demo` writing the documented sample output, and `EXPECTED`.

pub mod behavioral;
pub mod creational;
pub mod structural;
