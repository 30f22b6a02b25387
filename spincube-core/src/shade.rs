/// Shade ramp: a precomputed colour gradient standing in for per-frame
/// lighting math
use nom::{
    bytes::complete::{tag, take_while_m_n},
    combinator::map_res,
    sequence::tuple,
    IResult,
};

use crate::error::ConfigError;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` colour string.
    pub fn from_hex(input: &str) -> Result<Self, ConfigError> {
        match hex_colour(input) {
            Ok(("", rgb)) => Ok(rgb),
            _ => Err(ConfigError::InvalidColour(input.to_string())),
        }
    }

    /// Format as `#rrggbb`, the form the canvas API accepts.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |s: &str| u8::from_str_radix(s, 16),
    )(input)
}

fn hex_colour(input: &str) -> IResult<&str, Rgb> {
    let (input, _) = tag("#")(input)?;
    let (input, (r, g, b)) = tuple((hex_byte, hex_byte, hex_byte))(input)?;
    Ok((input, Rgb { r, g, b }))
}

/// A discrete linear gradient between two colours, indexed by shade level.
///
/// Entry 0 is exactly the start colour; each later entry adds a constant
/// per-step channel increment, rounded to the nearest integer and clamped so
/// no channel ever overshoots the end colour in its direction of travel.
pub struct ShadeRamp {
    entries: Vec<Rgb>,
}

impl ShadeRamp {
    pub fn build(start: Rgb, end: Rgb, count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::EmptyShadeRamp);
        }
        let mut entries = Vec::with_capacity(count);
        entries.push(start);

        let start_channels = [start.r, start.g, start.b];
        let end_channels = [end.r, end.g, end.b];
        let increments: Vec<f32> = start_channels
            .iter()
            .zip(&end_channels)
            .map(|(&s, &e)| (e as f32 - s as f32) / count as f32)
            .collect();

        let mut channels = [
            start.r as f32,
            start.g as f32,
            start.b as f32,
        ];
        for _ in 1..count {
            for (channel, increment) in channels.iter_mut().zip(&increments) {
                *channel += increment;
            }
            entries.push(Rgb {
                r: clamp_channel(channels[0], increments[0], end.r),
                g: clamp_channel(channels[1], increments[1], end.g),
                b: clamp_channel(channels[2], increments[2], end.b),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Colour at a shade level. Callers clamp their index first.
    pub fn get(&self, index: usize) -> Rgb {
        self.entries[index]
    }

    /// The brightest end of the ramp, also used as the stroke colour.
    pub fn last(&self) -> Rgb {
        self.entries[self.entries.len() - 1]
    }
}

/// Round a channel value, refusing to pass the end channel in the direction
/// the gradient travels.
fn clamp_channel(value: f32, increment: f32, end: u8) -> u8 {
    let rounded = value.round();
    let clamped = if increment >= 0.0 {
        rounded.min(end as f32)
    } else {
        rounded.max(end as f32)
    };
    clamped as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(Rgb::from_hex("#F89880").unwrap(), Rgb::new(0xF8, 0x98, 0x80));
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::from_hex("#ffffff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["F89880", "#F8988", "#F898801", "#F8988g", "", "#"] {
            assert!(matches!(
                Rgb::from_hex(bad),
                Err(ConfigError::InvalidColour(_))
            ));
        }
    }

    #[test]
    fn hex_round_trip() {
        let colour = Rgb::new(0xF8, 0x98, 0x80);
        assert_eq!(colour.to_hex(), "#f89880");
        assert_eq!(Rgb::from_hex(&colour.to_hex()).unwrap(), colour);
    }

    #[test]
    fn ramp_starts_exactly_at_start_colour() {
        let ramp = ShadeRamp::build(Rgb::new(0, 0, 0), Rgb::new(0xF8, 0x98, 0x80), 64).unwrap();
        assert_eq!(ramp.len(), 64);
        assert_eq!(ramp.get(0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn ramp_never_overshoots_the_end_colour() {
        let end = Rgb::new(0xF8, 0x98, 0x80);
        let ramp = ShadeRamp::build(Rgb::new(0, 0, 0), end, 64).unwrap();
        for i in 0..ramp.len() {
            let entry = ramp.get(i);
            assert!(entry.r <= end.r);
            assert!(entry.g <= end.g);
            assert!(entry.b <= end.b);
        }
        // per-step increments are (248, 152, 128) / 64, accumulated 63 times
        assert_eq!(ramp.last(), Rgb::new(244, 150, 126));
    }

    #[test]
    fn ramp_is_monotonic_per_channel() {
        let ramp = ShadeRamp::build(Rgb::new(0, 0, 0), Rgb::new(0xF8, 0x98, 0x80), 64).unwrap();
        for i in 1..ramp.len() {
            assert!(ramp.get(i).r >= ramp.get(i - 1).r);
            assert!(ramp.get(i).g >= ramp.get(i - 1).g);
            assert!(ramp.get(i).b >= ramp.get(i - 1).b);
        }
    }

    #[test]
    fn descending_ramp_clamps_from_below() {
        let end = Rgb::new(0, 0, 0);
        let ramp = ShadeRamp::build(Rgb::new(0xF8, 0x98, 0x80), end, 64).unwrap();
        assert_eq!(ramp.get(0), Rgb::new(0xF8, 0x98, 0x80));
        for i in 1..ramp.len() {
            assert!(ramp.get(i).r <= ramp.get(i - 1).r);
            assert!(ramp.get(i).g <= ramp.get(i - 1).g);
            assert!(ramp.get(i).b <= ramp.get(i - 1).b);
        }
    }

    #[test]
    fn zero_length_ramp_is_rejected() {
        assert!(matches!(
            ShadeRamp::build(Rgb::new(0, 0, 0), Rgb::new(1, 1, 1), 0),
            Err(ConfigError::EmptyShadeRamp)
        ));
    }

    #[test]
    fn single_entry_ramp_is_just_the_start() {
        let ramp = ShadeRamp::build(Rgb::new(10, 20, 30), Rgb::new(200, 200, 200), 1).unwrap();
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp.get(0), Rgb::new(10, 20, 30));
        assert_eq!(ramp.last(), Rgb::new(10, 20, 30));
    }
}
