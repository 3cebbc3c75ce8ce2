fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    // Usage: figure [seed] [sway] [scale]
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
    let sway: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1.0);
    let scale: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1.0);

    let mut figure = manikin::Figure::new("demo", manikin::Point::ORIGIN)
        .with_scale(scale)
        .with_sway(sway)
        .with_seed(seed);

    let svg = manikin::render_with_options(&mut figure, &manikin::RenderOptions { axes: true });
    println!("{}", svg);
}
