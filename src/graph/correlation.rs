use serde_json::Value;

/// Pulls the `arrays` field out of the request payload.
///
/// Error strings are part of the endpoint contract and surface verbatim in
/// the 400 response body.
pub fn parse_arrays(payload: &Value) -> Result<Vec<Vec<f64>>, &'static str> {
    let arrays = payload
        .get("arrays")
        .and_then(Value::as_array)
        .filter(|rows| rows.len() >= 2)
        .ok_or("arrays must be a list of at least two numeric lists")?;

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(arrays.len());
    for array in arrays {
        let row: Vec<f64> = serde_json::from_value(array.clone())
            .map_err(|_| "arrays must be numeric")?;
        rows.push(row);
    }

    let width = rows[0].len();
    if rows.iter().any(|row| row.len() != width) {
        return Err("all arrays must have same length");
    }

    Ok(rows)
}

/// Computes the Pearson correlation matrix of the given series.
///
/// A zero-variance series yields non-finite entries, which serialize as
/// JSON null downstream.
pub fn correlation_matrix(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = rows.len();
    let means: Vec<f64> = rows.iter().map(|row| mean(row)).collect();

    let mut corr = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let value = pearson(&rows[i], means[i], &rows[j], means[j]);
            corr[i][j] = value;
            corr[j][i] = value;
        }
    }
    corr
}

fn mean(row: &[f64]) -> f64 {
    if row.is_empty() {
        return 0.0;
    }
    row.iter().sum::<f64>() / row.len() as f64
}

fn pearson(a: &[f64], mean_a: f64, b: &[f64], mean_b: f64) -> f64 {
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}
