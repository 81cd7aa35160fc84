use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use synthforge::actions::Vocabulary;
use synthforge::bitstring::Bitstring;

/// One cell per 4-bit gene: slot, raw code and the command it selects.
pub fn print_script(name: &str, vocabulary: Vocabulary, bits: &Bitstring) {
    println!("\nScript: {} ({} vocabulary)", name, vocabulary);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 5;
    let genes: Vec<(usize, [bool; 4])> = bits.nibbles().enumerate().collect();

    for chunk in genes.chunks(cols) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|&(slot, code)| {
                let raw: String = code.iter().map(|&b| if b { '1' } else { '0' }).collect();
                let label = format!("#{:02} {}\n{}", slot, raw, vocabulary.action(code));
                Cell::new(label).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
