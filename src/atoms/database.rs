/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Periodic-table lookups for element symbols and atomic numbers

/// Element symbols indexed by atomic number (index 0 is a placeholder)
const SYMBOLS: [&str; 119] = [
    "", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg",
    "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Provides the element symbol for an atomic number
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    if (1..=118).contains(&atomic_number) {
        Some(SYMBOLS[atomic_number as usize])
    } else {
        None
    }
}

/// Provides the atomic number for an element symbol
pub fn atomic_number(symbol: &str) -> Option<i32> {
    SYMBOLS
        .iter()
        .position(|&s| !s.is_empty() && s == symbol)
        .map(|z| z as i32)
}
