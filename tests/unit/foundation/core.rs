use super::*;

#[test]
fn host_size_scales_by_pixel_ratio() {
    let host = HostSize::new(400, 300);
    assert_eq!(host.scaled(2.0), HostSize::new(800, 600));
    assert_eq!(host.scaled(1.0), host);
}

#[test]
fn size_rejects_degenerate_dimensions() {
    assert!(Size::new(0.0, 10.0).is_err());
    assert!(Size::new(10.0, f64::NAN).is_err());
    assert!(Size::new(-1.0, 10.0).is_err());
    assert_eq!(
        Size::new(1024.0, 768.0).unwrap(),
        Size {
            width: 1024.0,
            height: 768.0
        }
    );
}

#[test]
fn color_alpha_is_clamped() {
    assert_eq!(Color::new(1, 2, 3, 1.5).a, 1.0);
    assert_eq!(Color::new(1, 2, 3, -0.5).a, 0.0);
    assert_eq!(Color::new(1, 2, 3, f32::NAN).a, 0.0);
}

#[test]
fn premul_matches_straight_for_opaque_colors() {
    let c = Color::opaque(10, 200, 255);
    assert_eq!(c.to_premul_rgba8(), [10, 200, 255, 255]);

    let half = Color::new(200, 100, 0, 0.5);
    let [r, g, b, a] = half.to_premul_rgba8();
    assert_eq!(a, 128);
    assert_eq!(r, 100);
    assert_eq!(g, 50);
    assert_eq!(b, 0);
}

#[test]
fn color_displays_as_css_rgba() {
    assert_eq!(Color::new(255, 0, 10, 0.5).to_string(), "rgba(255,0,10,0.5)");
}
