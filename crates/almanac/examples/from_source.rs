//! Example: Generating an outline from catalog source
//!
//! This example demonstrates the basic workflow of:
//! 1. Creating a CatalogBuilder with default configuration
//! 2. Loading catalog markdown into the Section/Entry model
//! 3. Generating the outline and rendering it as Markdown

use almanac::CatalogBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Define catalog markdown for a small tips collection
    let source = "\
# Object creation

Ways of making new objects without loops.

## Create an empty list of a given length

Use `vector()` with the target mode.

```r
x <- vector(\"list\", 5)
```

## Generate regular sequences

# Factor handling

## Drop unused levels
";

    // Create a builder with default configuration
    let builder = CatalogBuilder::default();

    // Load the source into the catalog model
    println!("Loading catalog from source...");
    let catalog = builder.load(source)?;

    // Inspect the loaded catalog
    println!("Sections: {}", catalog.section_count());
    println!("Entries: {}", catalog.entry_count());

    // Generate the outline
    println!("\nGenerating outline...");
    let outline = builder.outline(&catalog)?;
    println!("Outline items: {}", outline.len());

    // Render the outline as Markdown
    let markdown = builder.render_markdown(&outline);
    println!("\n{markdown}");

    // Optionally write to file
    let output_path = "from_source_toc.md";
    std::fs::write(output_path, &markdown)?;
    println!("Outline written to: {}", output_path);

    Ok(())
}
