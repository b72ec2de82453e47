//! Persistence boundary. The P&L core never touches I/O; everything that
//! does lives here.

pub mod postgres;
