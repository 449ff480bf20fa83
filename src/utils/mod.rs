pub mod line_kind;
