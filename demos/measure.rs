use miette::Result;

fn main() -> Result<()> {
    // Usage: measure [scale] [part-name...]
    // With no part names, dumps the whole proportion table.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (scale, names) = match args.first().and_then(|a| a.parse::<f64>().ok()) {
        Some(scale) => (scale, &args[1..]),
        None => (1.0, &args[..]),
    };

    let props = manikin::Proportions::new(scale);

    if names.is_empty() {
        for part in manikin::BodyPart::ALL {
            println!("{:<18} {}", part.name(), props.length(part));
        }
        return Ok(());
    }

    for name in names {
        let length = props.get(name)?;
        println!("{:<18} {}", name, length);
    }
    Ok(())
}
