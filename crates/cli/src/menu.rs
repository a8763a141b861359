//! The interactive five-choice menu loop.
//!
//! This module owns every piece of user-facing text. The index returns typed
//! outcomes and advisories; rendering happens here and nowhere else. Input
//! that fails local validation (non-numeric prices or stock) never reaches
//! the index.

use std::io::{self, BufRead, Write};

use stockbook_core::{InventoryError, SerialNumber};
use stockbook_inventory::{IndexEvent, ItemIndex, LossAdvisory};

/// Run the menu loop until the user quits or input is exhausted.
pub fn run(
    index: &mut ItemIndex,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    loop {
        print_menu(&mut output)?;
        let Some(choice) = prompt(&mut input, &mut output, "Enter your choice (1-5): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_item(index, &mut input, &mut output)?,
            "2" => list_items(index, &mut output)?,
            "3" => update_stock(index, &mut input, &mut output)?,
            "4" => remove_item(index, &mut input, &mut output)?,
            "5" => {
                writeln!(output, "Exiting program.")?;
                break;
            }
            _ => writeln!(
                output,
                "Invalid choice. Please enter a number from 1 to 5."
            )?,
        }
    }
    Ok(())
}

fn print_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "--- Stock Item Index ---")?;
    writeln!(output, "1. Add item")?;
    writeln!(output, "2. List all items")?;
    writeln!(output, "3. Update item stock")?;
    writeln!(output, "4. Remove an item")?;
    writeln!(output, "5. Quit")?;
    Ok(())
}

/// Print `label` and read one trimmed line. `None` means input ended.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_item(
    index: &mut ItemIndex,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Add a new item")?;
    let Some(serial) = prompt(input, output, "Serial number: ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, output, "Item name: ")? else {
        return Ok(());
    };
    let Some(cost) = prompt(input, output, "Cost: ")? else {
        return Ok(());
    };
    let Some(sell_price) = prompt(input, output, "Sell price: ")? else {
        return Ok(());
    };
    let Some(stock) = prompt(input, output, "Number of items in stock: ")? else {
        return Ok(());
    };

    let (Ok(cost), Ok(sell_price), Ok(stock)) = (
        cost.parse::<f64>(),
        sell_price.parse::<f64>(),
        stock.parse::<u32>(),
    ) else {
        writeln!(output, "Invalid number entered. Item not added.")?;
        return Ok(());
    };

    match index.add_item(serial, name, cost, sell_price, stock) {
        Ok(added) => {
            tracing::info!(
                event = added.event_type(),
                serial = %added.item.serial_number(),
                "item added"
            );
            writeln!(output, "Item added successfully.")?;
            render_advisory(output, added.advisory.as_ref())?;
        }
        Err(InventoryError::DuplicateKey(_)) => {
            writeln!(output, "Item with this serial number already exists.")?;
        }
        Err(err) => writeln!(output, "Error: {err}")?,
    }
    Ok(())
}

fn list_items(index: &ItemIndex, output: &mut impl Write) -> io::Result<()> {
    if index.is_empty() {
        writeln!(output, "No items in index.")?;
        return Ok(());
    }
    writeln!(output, "--- Stock Item Index ---")?;
    for (item, advisory) in index.list_items() {
        writeln!(output, "{item}")?;
        render_advisory(output, advisory.as_ref())?;
    }
    writeln!(output, "------------------------")?;
    Ok(())
}

fn update_stock(
    index: &mut ItemIndex,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Update stock")?;
    let Some(serial) = prompt(input, output, "Serial number: ")? else {
        return Ok(());
    };
    let Some(new_stock) = prompt(input, output, "New stock value: ")? else {
        return Ok(());
    };
    let Ok(new_stock) = new_stock.parse::<u32>() else {
        writeln!(output, "Invalid stock value.")?;
        return Ok(());
    };

    match index.update_stock(&SerialNumber::new(serial), new_stock) {
        Ok(updated) => {
            tracing::info!(
                event = updated.event_type(),
                serial = %updated.item.serial_number(),
                previous_stock = updated.previous_stock,
                new_stock = updated.item.stock(),
                "stock updated"
            );
            writeln!(output, "Stock updated successfully.")?;
            render_advisory(output, updated.advisory.as_ref())?;
        }
        Err(InventoryError::NotFound(_)) => writeln!(output, "Item not found.")?,
        Err(err) => writeln!(output, "Error: {err}")?,
    }
    Ok(())
}

fn remove_item(
    index: &mut ItemIndex,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Remove item")?;
    let Some(serial) = prompt(input, output, "Serial number: ")? else {
        return Ok(());
    };

    match index.remove_item(&SerialNumber::new(serial)) {
        Ok(removed) => {
            tracing::info!(
                event = removed.event_type(),
                serial = %removed.item.serial_number(),
                "item removed"
            );
            writeln!(output, "Item removed successfully.")?;
        }
        Err(InventoryError::NotFound(_)) => writeln!(output, "Item not found.")?,
        Err(err) => writeln!(output, "Error: {err}")?,
    }
    Ok(())
}

fn render_advisory(output: &mut impl Write, advisory: Option<&LossAdvisory>) -> io::Result<()> {
    if let Some(advisory) = advisory {
        writeln!(output, "{advisory}")?;
    }
    Ok(())
}
