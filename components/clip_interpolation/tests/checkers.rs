/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use app_units::Au;
use clip_interpolation::checkers::all_valid;
use clip_interpolation::context::FontMetrics;
use clip_interpolation::values::computed::{ClipRect, Length};
use clip_interpolation::values::generics::GenericClipRectOrAuto;
use clip_interpolation::values::specified::{self, FontRelativeLength, ViewportPercentageLength};
use clip_interpolation::{
    ClipInterpolationType, ComputedValues, ConversionCheckers, CssWideKeyword, DeclaredValue,
    InterpolationEnvironment, InterpolationType, StyleResolverState,
};
use euclid::default::Size2D;

fn state() -> StyleResolverState {
    StyleResolverState::new(Size2D::new(Au::from_px(800), Au::from_px(600)))
}

fn uniform(length: specified::Length) -> DeclaredValue {
    DeclaredValue::Value(GenericClipRectOrAuto::Rect(specified::ClipRect::new(
        Some(length),
        Some(length),
        Some(length),
        Some(length),
    )))
}

#[test]
fn test_pixel_lengths_register_nothing() {
    let mut checkers = ConversionCheckers::new();
    ClipInterpolationType::default()
        .convert_value(&uniform(specified::Length::from_px(4.)), &state(), &mut checkers)
        .unwrap();
    assert!(checkers.is_empty());
}

#[test]
fn test_font_size_change_invalidates_em_conversion() {
    let mut state = state();
    let mut checkers = ConversionCheckers::new();
    let value = ClipInterpolationType::default()
        .convert_value(
            &uniform(specified::Length::FontRelative(FontRelativeLength::Em(1.))),
            &state,
            &mut checkers,
        )
        .unwrap();
    assert_eq!(value.interpolable.0, [16.; 4]);
    assert_eq!(checkers.len(), 1);
    assert!(all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));

    state.mutate_style().font_size = Length::new(24.);
    assert!(!all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));
}

#[test]
fn test_font_metrics_change_invalidates_ex_conversion() {
    let mut state = state();
    let mut checkers = ConversionCheckers::new();
    let value = ClipInterpolationType::default()
        .convert_value(
            &uniform(specified::Length::FontRelative(FontRelativeLength::Ex(2.))),
            &state,
            &mut checkers,
        )
        .unwrap();
    assert_eq!(value.interpolable.0, [16.; 4]);
    assert!(all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));

    state.set_font_metrics(FontMetrics {
        x_height: Some(Length::new(7.)),
        zero_advance_measure: None,
    });
    assert!(!all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));
}

#[test]
fn test_zero_advance_change_invalidates_ch_conversion() {
    let mut state = state();
    state.set_font_metrics(FontMetrics {
        x_height: None,
        zero_advance_measure: Some(Length::new(9.)),
    });
    let mut checkers = ConversionCheckers::new();
    let value = ClipInterpolationType::default()
        .convert_value(
            &uniform(specified::Length::FontRelative(FontRelativeLength::Ch(1.))),
            &state,
            &mut checkers,
        )
        .unwrap();
    assert_eq!(value.interpolable.0, [9.; 4]);
    assert!(all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));

    state.set_font_metrics(FontMetrics {
        x_height: None,
        zero_advance_measure: Some(Length::new(10.)),
    });
    assert!(!all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));
}

#[test]
fn test_root_font_size_change_invalidates_rem_conversion() {
    let mut state = state();
    let mut checkers = ConversionCheckers::new();
    ClipInterpolationType::default()
        .convert_value(
            &uniform(specified::Length::FontRelative(FontRelativeLength::Rem(1.))),
            &state,
            &mut checkers,
        )
        .unwrap();
    assert_eq!(checkers.len(), 1);

    state.mutate_style().font_size = Length::new(30.);
    assert!(all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));

    state.set_root_font_size(Length::new(30.));
    assert!(!all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));
}

#[test]
fn test_viewport_resize_invalidates_viewport_conversion() {
    let mut state = state();
    let mut checkers = ConversionCheckers::new();
    let declared = DeclaredValue::Value(GenericClipRectOrAuto::Rect(specified::ClipRect::new(
        Some(specified::Length::ViewportPercentage(ViewportPercentageLength::Vh(10.))),
        Some(specified::Length::ViewportPercentage(ViewportPercentageLength::Vw(10.))),
        Some(specified::Length::FontRelative(FontRelativeLength::Em(1.))),
        None,
    )));
    let value = ClipInterpolationType::default()
        .convert_value(&declared, &state, &mut checkers)
        .unwrap();
    assert_eq!(value.interpolable.0, [60., 80., 16., 0.]);
    assert_eq!(checkers.len(), 2);

    state.set_viewport_size(Size2D::new(Au::from_px(1024), Au::from_px(600)));
    assert!(!all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));
}

#[test]
fn test_parent_clip_change_invalidates_inherit() {
    let parent = ComputedValues {
        clip: GenericClipRectOrAuto::Rect(ClipRect::from_px(0., 10., 10., 0.)),
        ..ComputedValues::default()
    };
    let mut state = state().with_parent_style(parent);
    let mut checkers = ConversionCheckers::new();
    let value = ClipInterpolationType::default().convert_inherit(&state, &mut checkers);
    assert_eq!(value.interpolable.0, [0., 10., 10., 0.]);
    assert!(all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));

    if let Some(parent) = state.mutate_parent_style() {
        parent.clip = GenericClipRectOrAuto::Auto;
    }
    assert!(!all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));
}

#[test]
fn test_inherit_on_root_uses_initial_value() {
    let mut state = state();
    let mut checkers = ConversionCheckers::new();
    let value = ClipInterpolationType::default()
        .convert_single(
            &DeclaredValue::CssWideKeyword(CssWideKeyword::Inherit),
            &state,
            &mut checkers,
        )
        .unwrap();
    assert!(value.autos.is_auto());
    assert!(all_valid(&checkers, &InterpolationEnvironment::new(&mut state), None));
}

#[test]
fn test_neutral_checker_follows_underlying_autos() {
    let clip = ClipInterpolationType::default();
    let mut state = state();
    state.mutate_style().clip = GenericClipRectOrAuto::Rect(ClipRect::new(
        None,
        Some(Length::new(1.)),
        Some(Length::new(2.)),
        Some(Length::new(3.)),
    ));

    let mut checkers = ConversionCheckers::new();
    let underlying = clip
        .convert_underlying(&InterpolationEnvironment::new(&mut state))
        .unwrap();
    clip.convert_neutral(&underlying, &mut checkers);

    let environment = InterpolationEnvironment::new(&mut state);
    assert!(all_valid(&checkers, &environment, Some(&underlying)));

    let all_lengths = clip_interpolation::values::animated::InterpolationValue::from_computed(
        &GenericClipRectOrAuto::Rect(ClipRect::from_px(0., 1., 2., 3.)),
    );
    assert!(!all_valid(&checkers, &environment, Some(&all_lengths)));
}
