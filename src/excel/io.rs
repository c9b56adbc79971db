use calamine::Data;

/// Convierte un `Data` de calamine a String.
/// Los números sin parte fraccionaria quedan como enteros; las fechas que son
/// solo hora (serial < 1) se muestran como `H:MM` para conservar las franjas.
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            if (0.0..1.0).contains(&serial) {
                serial_time_to_string(serial)
            } else {
                dt.to_string()
            }
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Fracción del día -> "H:MM" (reloj de 24h, redondeado al minuto).
pub fn serial_time_to_string(serial: f64) -> String {
    let total = (serial * 24.0 * 60.0).round() as i64;
    let total = total.rem_euclid(24 * 60);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Normaliza encabezados: minúsculas y sin espacios.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}
