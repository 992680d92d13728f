use goban::{new_board, GridConfig, Palette, Position, ScriptedSource};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <moves>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let moves: usize = args[2].parse()?;

    let config = GridConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let labels: Vec<String> = (0..moves)
        .map(|_| {
            // roughly one in eight activations points past the last row
            let row = if rng.random_ratio(1, 8) {
                config.size
            } else {
                rng.random_range(0..config.size)
            };
            let col = rng.random_range(0..config.size);
            Position::new(row, col).label(&config).unwrap_or_default()
        })
        .collect();

    let mut board = new_board(config, Palette::default())?;
    let summary = board.run(&mut ScriptedSource::new(labels)).await?;

    let occupied = board
        .surface()
        .cells()
        .iter()
        .filter(|c| c.top_style().is_some())
        .count();

    let result = json!({
        "seed": seed,
        "summary": summary,
        "occupied": occupied,
        "next_style": board.session().next_style(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
