use num_traits::PrimInt;

/// Trait to link a signed sample type to its unsigned counterpart.
pub trait HasUnsigned {
    type Unsigned: PrimInt;
}

/// Trait to link an unsigned integer type to its signed counterpart.
pub trait HasSigned {
    type Signed: PrimInt;
}

// Implementations for the sample widths the codec supports.

impl HasUnsigned for i8 { type Unsigned = u8; }
impl HasUnsigned for i16 { type Unsigned = u16; }
impl HasUnsigned for i32 { type Unsigned = u32; }

impl HasSigned for u8 { type Signed = i8; }
impl HasSigned for u16 { type Signed = i16; }
impl HasSigned for u32 { type Signed = i32; }
