// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hedgerow Theme: monochromatic HSL color schemes.
//!
//! A [`Scheme`] is the hue/saturation/lightness triple that drives a widget's
//! monochromatic palette. Stylesheet-driven hosts consume it as CSS custom
//! properties (`--hue`, `--sat`, `--lum`) and derive every role in CSS;
//! painting hosts resolve concrete colors through [`palette`] instead.
//!
//! ```rust
//! use hedgerow_theme::Scheme;
//!
//! let ocean = Scheme::new(205.0, 90.0, 65.0);
//!
//! // Stylesheet-driven hosts consume the raw triple…
//! assert_eq!(ocean.css_custom_properties(), "--hue: 205; --sat: 90; --lum: 65;");
//!
//! // …while painting hosts resolve concrete colors.
//! let (r, g, b) = ocean.to_srgb().into_components();
//! assert!(b > r);
//!
//! // Derived roles stay within the monochromatic family.
//! let fg = ocean.contrast();
//! assert_eq!(fg.hue, ocean.hue);
//! assert!(fg.lightness < ocean.lightness);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `palette`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

use palette::{Darken, FromColor, Hsl, Lighten, ShiftHue, Srgb};

/// A monochromatic color scheme expressed in CSS-style HSL units.
///
/// `hue` is in degrees (wrapped into `[0, 360)` when resolved), `saturation`
/// and `lightness` are percentages (clamped into `[0, 100]` when resolved).
/// The raw fields are kept as given so the emitted custom properties match
/// caller input exactly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scheme {
    /// Hue angle in degrees.
    pub hue: f32,
    /// Saturation as a percentage.
    pub saturation: f32,
    /// Lightness as a percentage.
    pub lightness: f32,
}

impl Scheme {
    /// Creates a scheme from a hue angle (degrees) and saturation/lightness
    /// percentages.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Returns the CSS custom-property declarations driving a stylesheet
    /// palette, in the form `--hue: H; --sat: S; --lum: L;`.
    ///
    /// The values are emitted unitless; the consuming stylesheet applies
    /// `deg`/`%` scaling itself.
    #[must_use]
    pub fn css_custom_properties(&self) -> String {
        format!(
            "--hue: {}; --sat: {}; --lum: {};",
            self.hue, self.saturation, self.lightness
        )
    }

    /// Returns the scheme as a CSS `hsl()` functional color.
    #[must_use]
    pub fn css_hsl(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue,
            self.saturation.clamp(0.0, 100.0),
            self.lightness.clamp(0.0, 100.0)
        )
    }

    /// Resolves the scheme as a [`palette`] HSL color.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        Hsl::new(
            self.hue,
            self.saturation.clamp(0.0, 100.0) / 100.0,
            self.lightness.clamp(0.0, 100.0) / 100.0,
        )
    }

    /// Resolves the scheme to an 8-bit sRGB color.
    #[must_use]
    pub fn to_srgb(&self) -> Srgb<u8> {
        Srgb::from_color(self.hsl()).into_format::<u8>()
    }

    /// Resolves the scheme to a `#rrggbb` hex string.
    #[must_use]
    pub fn hex(&self) -> String {
        let (r, g, b) = self.to_srgb().into_components();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Returns `true` if the scheme reads as a dark background.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.lightness <= 50.0
    }

    /// Returns the foreground scheme that stays readable on top of this one.
    ///
    /// Hue and saturation are preserved; lightness flips to near-black over a
    /// light scheme and near-white over a dark one.
    #[must_use]
    pub fn contrast(&self) -> Self {
        let lightness = if self.is_dark() { 95.0 } else { 5.0 };
        Self {
            lightness,
            ..*self
        }
    }

    /// Returns a sibling scheme with the hue rotated by `degrees`.
    ///
    /// The result's hue is wrapped into `[0, 360)`.
    #[must_use]
    pub fn harmony(&self, degrees: f32) -> Self {
        let shifted = self.hsl().shift_hue(degrees);
        Self {
            hue: shifted.hue.into_positive_degrees(),
            ..*self
        }
    }

    /// Returns the scheme lightened by `factor`, a fraction in `[0, 1]` of
    /// the remaining headroom towards white.
    #[must_use]
    pub fn lighten(&self, factor: f32) -> Self {
        Self {
            lightness: self.hsl().lighten(factor).lightness * 100.0,
            ..*self
        }
    }

    /// Returns the scheme darkened by `factor`, a fraction in `[0, 1]` of
    /// the remaining distance towards black.
    #[must_use]
    pub fn darken(&self, factor: f32) -> Self {
        Self {
            lightness: self.hsl().darken(factor).lightness * 100.0,
            ..*self
        }
    }
}
