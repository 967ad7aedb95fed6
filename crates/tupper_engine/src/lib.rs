//! Conversion engine for Tupper's self-referential formula.
//!
//! Three representations of the same picture are kept interchangeable:
//! - `k`, an arbitrary-precision decimal integer
//! - the binary digits of `floor(k / 17)`, padded to [`CELL_COUNT`] digits
//! - a [`PixelMatrix`] of [`HEIGHT`] rows by [`WIDTH`] columns
//!
//! See [`codec`] for the conversions.

mod error;
pub use error::*;

pub mod codec;
pub use codec::{decode, decode_binary, encode, quotient_binary};

mod pixel_matrix;
pub use pixel_matrix::*;

/// Grid width in cells (columns)
pub const WIDTH: usize = 106;

/// Grid height in cells (rows)
pub const HEIGHT: usize = 17;

/// Number of cells, equal to the padded length of the binary digits
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Factor between the encoded quotient and `k`
pub const SCALE: u32 = 17;

/// The `k` whose grid draws Tupper's formula itself.
pub const TUPPER_K: &str = "4858450636189713423582095962494202044581400587983244549483093085061934704708809928450644769865524364849997247024915119110411605739177407856919754326571855442057210445735883681829823754139634338225199452191651284348332905131193199953502413758765239264874613394906870130562295813219481113685339535565290850023875092856892694555974281546386510730049106723058933586052544096664351265349363643957125565695936815184334857605266940161251266951421550539554519153785457525756590740540157929001765967965480064427829131488548259914721248506352686630476300";
