use anyhow::Result;
use linearalgebra::math::{
    distance, get_col, is_diagonal, magnitude, make_matrix, vector_mean, Matrix,
};
use linearalgebra::{LengthPolicy, Vector, VectorOps};
use log::LevelFilter;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINALG_LOG", "error,linearalgebra=info"))
        .init();

    let identity: Matrix<f64> = make_matrix(4, 4, is_diagonal);
    log::info!("identity: {}", identity);

    let columns = (0..identity.ncols())
        .map(|j| get_col(&identity, j))
        .collect::<Result<Vec<_>, _>>()?;
    let centroid = vector_mean(&columns)?;
    log::info!("centroid of the unit vectors: {}", centroid);
    log::info!("|centroid| = {:.4}", magnitude(&centroid));
    log::info!(
        "distance from e0 to centroid = {:.4}",
        distance(&columns[0], &centroid)?
    );

    let short = Vector::from_vec(vec![1.0, 2.0]);
    let ops = VectorOps::with_policy(LengthPolicy::Truncate);
    log::info!("truncated sum: {}", ops.add(&columns[1], &short)?);

    Ok(())
}
