mod bitfield;
mod uint_codec;

pub use bitfield::{BitfieldU32, FlaggedU31, read_flagged_u31, write_flagged_u31};
pub use uint_codec::{
    read_array, read_u8, read_u16, read_u24, read_u32, write_u8, write_u16, write_u24, write_u32,
};
