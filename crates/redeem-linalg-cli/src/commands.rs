use anyhow::{Context, Result};
use redeem_linalg::config::LinalgConfig;
use redeem_linalg::math::rotation::{rotate_2d_vector, rotate_3d};
use redeem_linalg::math::Axis;
use redeem_linalg::Vector;
use std::str::FromStr;

fn format_vector(config: &LinalgConfig, v: &Vector) -> String {
    format!("{:.*}", config.precision, v.mapv(|x| config.snap(x)))
}

fn format_angle(config: &LinalgConfig, radians: f64) -> String {
    format!(
        "{:.*} {}",
        config.precision,
        config.snap(config.angle_unit.from_radians(radians)),
        config.angle_unit.suffix()
    )
}

/// Cross product of `a = (1, 2, 3)` and `b = (3, 2, 1)`, and the angle
/// between the product and each operand.
pub fn run_demo(config: &LinalgConfig) -> Result<String> {
    let a = Vector::from_vec(vec![1.0, 2.0, 3.0])?;
    let b = Vector::from_vec(vec![3.0, 2.0, 1.0])?;
    let c = a.cross_product(&b)?;

    let mut out = String::new();
    out.push_str(&format!("a = {}\n", format_vector(config, &a)));
    out.push_str(&format!("b = {}\n", format_vector(config, &b)));
    out.push_str(&format!("a x b = {}\n", format_vector(config, &c)));
    out.push_str(&format!(
        "angle(a x b, b) = {}\n",
        format_angle(config, c.angle_between(&b)?)
    ));
    out.push_str(&format!(
        "angle(a x b, a) = {}\n",
        format_angle(config, c.angle_between(&a)?)
    ));
    Ok(out)
}

/// Rotate `components` by `angle` (in the configured unit).
///
/// `axis` is `2d` for a planar rotation, otherwise one of `yaw`, `pitch`,
/// `roll`.
pub fn run_rotate(
    config: &LinalgConfig,
    axis: &str,
    angle: f64,
    components: &[f64],
) -> Result<String> {
    let v = Vector::from_vec(components.to_vec()).context("Invalid vector")?;
    let radians = config.angle_unit.to_radians(angle);

    let rotated = if axis.eq_ignore_ascii_case("2d") {
        rotate_2d_vector(&v, radians)
    } else {
        let axis = Axis::from_str(axis).map_err(anyhow::Error::msg)?;
        rotate_3d(&v, axis, radians)
    }
    .with_context(|| format!("Failed to rotate {} ({})", v, axis))?;

    log::info!(
        "[ReDeeM::Linalg] Rotated {} by {} {} ({})",
        v,
        angle,
        config.angle_unit.suffix(),
        axis
    );
    Ok(format!("{}\n", format_vector(config, &rotated)))
}

/// The effective configuration as pretty JSON.
pub fn run_config(config: &LinalgConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    Ok(format!("{}\n", json))
}
