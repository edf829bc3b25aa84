//! Literals for infinities and NaNs.

use super::common::{self, Error};
use super::float::Classification;

/// Writes the literal for a non-finite value, returning the number of bytes written:
///
/// | value          | text          |
/// |----------------|---------------|
/// | `+inf`         | `inf`         |
/// | `-inf`         | `-inf`        |
/// | quiet `+NaN`   | `nan`         |
/// | quiet `-NaN`   | `-nan(ind)`   |
/// | signaling NaN  | `[-]nan(snan)`|
///
/// `negative` must come from the sign bit, since NaNs don't compare. Nothing is written if the
/// whole literal doesn't fit.
pub fn format_nonfinite(buf: &mut [u8], negative: bool, classification: Classification) -> Result<usize, Error> {
    let literal: &[u8] = match classification {
        Classification::Infinite => b"inf",
        Classification::NanQuiet if negative => b"nan(ind)",
        Classification::NanQuiet => b"nan",
        Classification::NanSignaling => b"nan(snan)",
        Classification::Finite | Classification::Zero => {
            unreachable!("{classification:?} value handed to the non-finite renderer")
        }
    };

    common::ensure_fits(buf, negative as usize + literal.len())?;
    let mut pos = 0;
    common::write_sign(negative, buf, &mut pos);
    common::write_to(literal, buf, &mut pos);
    Ok(pos)
}
