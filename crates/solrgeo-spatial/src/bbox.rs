//! Bounding box type and parsing.

use std::str::FromStr;

use crate::{Envelope, WrongBoundingBoxFormat};

/// A rectangular map region given by its west, south, east, and north bounds.
///
/// Any four parseable numbers are accepted: no ordering between the min and
/// max bounds is enforced, and no geographic range check (latitude within
/// ±90, longitude within ±180) is applied. Callers wanting stricter
/// validation do it themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western bound (minimum X).
    pub min_x: f64,
    /// Southern bound (minimum Y).
    pub min_y: f64,
    /// Eastern bound (maximum X).
    pub max_x: f64,
    /// Northern bound (maximum Y).
    pub max_y: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its four bounds.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Parses the Solr lat-lon rectangle format: `"minX minY maxX maxY"`,
    /// four whitespace-separated numbers.
    pub fn from_rectangle(raw: &str) -> Result<Self, WrongBoundingBoxFormat> {
        Self::from_tokens(raw, raw.split_whitespace())
    }

    /// Parses the comma-delimited coordinate format: `"minX,minY,maxX,maxY"`.
    ///
    /// Whitespace around individual coordinates is tolerated.
    pub fn from_coords(raw: &str) -> Result<Self, WrongBoundingBoxFormat> {
        Self::from_tokens(raw, raw.split(',').map(str::trim))
    }

    /// Parses four numeric tokens into a bounding box.
    fn from_tokens<'a>(
        raw: &str,
        tokens: impl Iterator<Item = &'a str>,
    ) -> Result<Self, WrongBoundingBoxFormat> {
        let tokens: Vec<&str> = tokens.collect();
        if tokens.len() != 4 {
            return Err(WrongBoundingBoxFormat::new(
                raw,
                format!("expected four numbers, found {}", tokens.len()),
            ));
        }

        let mut bounds = [0.0_f64; 4];
        for (slot, token) in bounds.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|_| {
                WrongBoundingBoxFormat::new(raw, format!("{token:?} is not a number"))
            })?;
        }

        Ok(Self::new(bounds[0], bounds[1], bounds[2], bounds[3]))
    }

    /// Returns the spatial envelope form of this box.
    pub fn envelope(&self) -> Envelope {
        Envelope::from(*self)
    }
}

impl FromStr for BoundingBox {
    type Err = WrongBoundingBoxFormat;

    /// Accepts either supported format: comma-delimited when the input
    /// contains a comma, whitespace-separated otherwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            Self::from_coords(s)
        } else {
            Self::from_rectangle(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_format() {
        let bbox = BoundingBox::from_rectangle("-10 -5 10 5").unwrap();
        assert_eq!(bbox, BoundingBox::new(-10.0, -5.0, 10.0, 5.0));
    }

    #[test]
    fn rectangle_fractional_values() {
        let bbox = BoundingBox::from_rectangle("-120.5 32.25 -118.125 34.75").unwrap();
        assert_eq!(bbox.min_x, -120.5);
        assert_eq!(bbox.min_y, 32.25);
        assert_eq!(bbox.max_x, -118.125);
        assert_eq!(bbox.max_y, 34.75);
    }

    #[test]
    fn rectangle_extra_whitespace() {
        let bbox = BoundingBox::from_rectangle("  -10   -5  10  5  ").unwrap();
        assert_eq!(bbox, BoundingBox::new(-10.0, -5.0, 10.0, 5.0));
    }

    #[test]
    fn coords_format() {
        let bbox = BoundingBox::from_coords("-10,-5,10,5").unwrap();
        assert_eq!(bbox, BoundingBox::new(-10.0, -5.0, 10.0, 5.0));
    }

    #[test]
    fn coords_with_spaces() {
        let bbox = BoundingBox::from_coords("-10, -5, 10, 5").unwrap();
        assert_eq!(bbox, BoundingBox::new(-10.0, -5.0, 10.0, 5.0));
    }

    #[test]
    fn from_str_dispatches_on_comma() {
        let rect: BoundingBox = "-10 -5 10 5".parse().unwrap();
        let coords: BoundingBox = "-10,-5,10,5".parse().unwrap();
        assert_eq!(rect, coords);
    }

    #[test]
    fn too_few_tokens() {
        let err = BoundingBox::from_rectangle("1 2 3").unwrap_err();
        assert!(err.reason.contains("found 3"));
        assert_eq!(err.input, "1 2 3");
    }

    #[test]
    fn too_many_tokens() {
        let err = BoundingBox::from_rectangle("1 2 3 4 5").unwrap_err();
        assert!(err.reason.contains("found 5"));
    }

    #[test]
    fn empty_input() {
        let err = BoundingBox::from_rectangle("").unwrap_err();
        assert!(err.reason.contains("found 0"));
    }

    #[test]
    fn non_numeric_token() {
        let err = BoundingBox::from_rectangle("1 2 east 4").unwrap_err();
        assert!(err.reason.contains("\"east\""));
        assert!(err.reason.contains("not a number"));
    }

    #[test]
    fn trailing_comma_rejected() {
        let err = BoundingBox::from_coords("1,2,3,4,").unwrap_err();
        assert!(err.reason.contains("found 5"));
    }

    #[test]
    fn inverted_bounds_accepted() {
        // No min/max ordering is enforced.
        let bbox = BoundingBox::from_rectangle("10 5 -10 -5").unwrap();
        assert_eq!(bbox.min_x, 10.0);
        assert_eq!(bbox.max_x, -10.0);
    }

    #[test]
    fn out_of_range_coordinates_accepted() {
        // No geographic range validation either.
        let bbox = BoundingBox::from_rectangle("-400 -100 400 100").unwrap();
        assert_eq!(bbox.max_x, 400.0);
    }

    #[test]
    fn scientific_notation_accepted() {
        let bbox = BoundingBox::from_rectangle("-1e1 -5e-1 1e1 5e-1").unwrap();
        assert_eq!(bbox, BoundingBox::new(-10.0, -0.5, 10.0, 0.5));
    }
}
