use comfy_table::{ContentArrangement, Table};
use fbf_core::{Position, Topic};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Topic"]);
    for topic in Topic::ALL {
        table.add_row(vec![topic.id(), topic.display_name()]);
    }
    println!("{table}");
    println!();

    println!("  Positions:");
    for position in Position::ALL {
        println!(
            "  {}. {:<5}  {}",
            position.index() + 1,
            position.title(),
            position.description()
        );
    }

    Ok(())
}
