// Logging and display helpers shared by the binding and the demo views.
use crate::model::Point;

/// Writes one line to the browser console. No-op off the web.
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn format_point(p: Point) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

pub fn format_degrees(radians: f64) -> String {
    format!("{:.1}°", radians.to_degrees())
}

/// Milliseconds since the time origin as `m:ss.mmm` or `s.mmms`.
pub fn format_ms(ms: f64) -> String {
    let total = ms.max(0.0).round() as u64;
    let secs = total / 1000;
    let millis = total % 1000;
    let m = secs / 60;
    let s = secs % 60;
    if m > 0 {
        format!("{}:{:02}.{:03}", m, s, millis)
    } else {
        format!("{}.{:03}s", s, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_timestamps() {
        assert_eq!(format_ms(0.0), "0.000s");
        assert_eq!(format_ms(1234.4), "1.234s");
        assert_eq!(format_ms(61_005.0), "1:01.005");
        assert_eq!(format_ms(-5.0), "0.000s");
    }

    #[test]
    fn formats_geometry() {
        assert_eq!(format_point(Point::new(1.26, -3.0)), "(1.3, -3.0)");
        assert_eq!(format_degrees(std::f64::consts::FRAC_PI_2), "90.0°");
    }
}
