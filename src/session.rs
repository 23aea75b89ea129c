//! Interactive find/add/quit loop.
//!
//! The session is generic over its input and output streams so tests can
//! script an entire dialogue through in-memory buffers; the `outfit` binary
//! wires up stdin and stdout. Answers are trimmed and matched without regard
//! to case. A bad answer abandons the current flow with a notice and returns
//! to the action prompt rather than ending the session.

use crate::catalog::{Catalog, CatalogStore, Category, Item, Style, TemperatureBand, Weather};
use crate::outfit::{Conditions, plan_outfit, render_outfit};
use crate::selector::Picker;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Drive the interactive loop until `quit` or end of input.
///
/// `find` asks for today's conditions and prints the outfit report. `add`
/// asks for a new item, persists it through the store, and only then updates
/// the in-memory catalog, so the file never lags behind what selection sees.
pub fn run_session<R, W>(
    input: &mut R,
    output: &mut W,
    store: &CatalogStore,
    catalog: &mut Catalog,
    picker: &mut dyn Picker,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(action) = prompt(input, output, "Choose an action (find/add/quit): ")? else {
            return Ok(());
        };
        match action.to_ascii_lowercase().as_str() {
            "find" => find_flow(input, output, catalog, picker)?,
            "add" => add_flow(input, output, store, catalog)?,
            "quit" => return Ok(()),
            _ => writeln!(output, "Invalid action. Please choose again.")?,
        }
    }
}

/// Write `text`, flush, and read one trimmed line. `None` means end of input.
fn prompt<R, W>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("reading an answer from the prompt")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn find_flow<R, W>(
    input: &mut R,
    output: &mut W,
    catalog: &Catalog,
    picker: &mut dyn Picker,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(raw_temperature) = prompt(input, output, "What is the temperature today: ")? else {
        return Ok(());
    };
    let Ok(temperature_c) = raw_temperature.parse::<i32>() else {
        writeln!(output, "Invalid temperature. Please enter a whole number.")?;
        return Ok(());
    };

    let Some(raw_style) = prompt(input, output, "What is the style today (casual/formal): ")?
    else {
        return Ok(());
    };
    let Some(style) = Style::parse(&raw_style) else {
        writeln!(output, "Invalid style. Expected casual or formal.")?;
        return Ok(());
    };

    let Some(raw_weather) =
        prompt(input, output, "Is it rainy or sunny outside? (rainy/sunny): ")?
    else {
        return Ok(());
    };
    let Some(weather) = Weather::parse(&raw_weather) else {
        writeln!(output, "Invalid weather. Expected rainy or sunny.")?;
        return Ok(());
    };

    let conditions = Conditions {
        temperature_c,
        style,
        weather,
    };
    let outfit = plan_outfit(catalog, conditions, picker);
    let mut report = String::new();
    render_outfit(&outfit, &mut report)?;
    write!(output, "{report}")?;
    Ok(())
}

fn add_flow<R, W>(
    input: &mut R,
    output: &mut W,
    store: &CatalogStore,
    catalog: &mut Catalog,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(raw_category) = prompt(
        input,
        output,
        "Enter the category of the item (jacket/shirt/pants/shoes): ",
    )?
    else {
        return Ok(());
    };
    let Some(category) = Category::parse(&raw_category) else {
        writeln!(
            output,
            "Invalid category. Expected jacket, shirt, pants, or shoes."
        )?;
        return Ok(());
    };

    let Some(name) = prompt(input, output, "Enter the name of the item: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        writeln!(output, "Item name must not be empty.")?;
        return Ok(());
    }

    let Some(color) = prompt(input, output, "Enter the color of the item: ")? else {
        return Ok(());
    };
    if color.is_empty() {
        writeln!(output, "Item color must not be empty.")?;
        return Ok(());
    }

    let Some(raw_band) = prompt(
        input,
        output,
        "Enter the temperature category of the item (cold/medium/hot): ",
    )?
    else {
        return Ok(());
    };
    let Some(band) = TemperatureBand::parse(&raw_band) else {
        writeln!(
            output,
            "Invalid temperature category. Expected cold, medium, or hot."
        )?;
        return Ok(());
    };

    let Some(raw_weather) = prompt(
        input,
        output,
        "Is this item for rainy or sunny weather (rainy/sunny)? ",
    )?
    else {
        return Ok(());
    };
    let Some(weather) = Weather::parse(&raw_weather) else {
        writeln!(output, "Invalid weather. Expected rainy or sunny.")?;
        return Ok(());
    };

    let Some(raw_style) = prompt(
        input,
        output,
        "Enter the style category of the item (casual/formal): ",
    )?
    else {
        return Ok(());
    };
    let Some(style) = Style::parse(&raw_style) else {
        writeln!(output, "Invalid style. Expected casual or formal.")?;
        return Ok(());
    };

    let item = Item {
        category,
        name,
        color,
        band,
        style,
        weather,
    };
    store
        .append(&item)
        .context("appending the new item to the catalog file")?;
    catalog.add(item);
    writeln!(output, "Item added successfully.")?;
    Ok(())
}
