// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless drawer toggle.
//!
//! Drive a `DrawerToggle` over a toolbar model: open the drawer from a
//! navigation click, replay the slide, then run a directed back toggle and
//! print the glyph path of every frame as SVG path data.
//!
//! Run:
//! - `cargo run -p understory_demos --example drawer_toggle_headless`

use kurbo::Rect;
use understory_demos::InstantDrawer;
use understory_drawer_glyph::DrawerGlyphStyle;
use understory_drawer_toggle::{DrawerMotion, DrawerToggle, ResourceId, ToolbarSink};

const OPEN_DRAWER: ResourceId = ResourceId::new(1);
const CLOSE_DRAWER: ResourceId = ResourceId::new(2);
const FRAME_MS: u64 = 16;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let toolbar = ToolbarSink::new(Some("arrow_back"), ResourceId::NONE)
        .with_style(DrawerGlyphStyle::default().with_size(48.0).with_bar_thickness(4.0));
    let mut toggle = DrawerToggle::new(toolbar, InstantDrawer::default(), OPEN_DRAWER, CLOSE_DRAWER);
    toggle.sync_state(None);
    let bounds = Rect::from_origin_size((0.0, 0.0), toggle.glyph().intrinsic_size());

    // The user taps the glyph; the drawer reports its slide.
    toggle.on_navigation_click();
    toggle.on_state_changed(DrawerMotion::Settling);
    for step in 0..=4 {
        let offset = f64::from(step) / 4.0;
        toggle.on_slide(offset);
        print_frame(&format!("slide {offset:.2}"), &toggle, bounds);
    }
    toggle.on_opened();
    toggle.on_state_changed(DrawerMotion::Idle);
    println!("description: {:?}", toggle.sink().description());

    // Flip the glyph back to the hamburger with a reversed sweep.
    toggle.toggle_indicator(true);
    let mut now = 0;
    while toggle.on_animation_frame(now) {
        print_frame(&format!("t={now}ms"), &toggle, bounds);
        now += FRAME_MS;
    }
    print_frame("settled", &toggle, bounds);

    let saved = toggle.persist();
    println!("persisted: {saved:?}");
}

fn print_frame(
    label: &str,
    toggle: &DrawerToggle<ToolbarSink<&'static str>, InstantDrawer>,
    bounds: Rect,
) {
    let Some(frame) = toggle.sink().render(bounds) else {
        println!("{label}: static indicator");
        return;
    };
    println!(
        "{label}: progress={:.3} mirrored={} path=\"{}\"",
        toggle.glyph_state().progress(),
        toggle.glyph_state().is_mirrored(),
        frame.world_path().to_svg()
    );
}
