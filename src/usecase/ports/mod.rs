pub mod table_io;
