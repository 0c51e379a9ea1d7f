//! Fixed label → code tables for the three recognized columns.
//!
//! Keys are stored already normalized (trimmed, upper case). English tokens
//! and their Portuguese synonyms, accented or not, share one code.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const COMMUNICATION_TYPE_COLUMN: &str = "communication_type";
pub const OCCURRENCE_TYPES_COLUMN: &str = "occurrence_types";
pub const OCCURRENCE_STATUS_COLUMN: &str = "occurrence_status";

/// Immutable many-to-one mapping from normalized label to integer code.
#[derive(Debug)]
pub struct LookupTable {
    column: &'static str,
    entries: Vec<(&'static str, i64)>,
    index: HashMap<&'static str, i64>,
}

/// Normalized form of a cell used as lookup key.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl LookupTable {
    /// Build a table from pre-normalized keys. Later duplicates win.
    pub fn new(column: &'static str, entries: &[(&'static str, i64)]) -> Self {
        debug_assert!(entries.iter().all(|(k, _)| normalize_key(k) == *k));
        Self {
            column,
            entries: entries.to_vec(),
            index: entries.iter().copied().collect(),
        }
    }

    /// Name of the column this table is meant for.
    pub fn column(&self) -> &'static str {
        self.column
    }

    /// Code for `raw` after trimming and upper-casing it.
    pub fn get(&self, raw: &str) -> Option<i64> {
        self.index.get(normalize_key(raw).as_str()).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys and codes in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static COMMUNICATION_TYPE: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(
        COMMUNICATION_TYPE_COLUMN,
        &[
            ("CALL", 0),
            ("WHATSAPP", 1),
            ("DIGISAC", 2),
            ("EMAIL", 3),
            ("TELEMETRY", 4),
            ("TELEMETRIA", 4),
            ("AUTOMATIC", 5),
            ("AUTOMATICO", 5),
            ("SALESFORCE", 6),
        ],
    )
});

pub static OCCURRENCE_TYPES: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(
        OCCURRENCE_TYPES_COLUMN,
        &[
            ("ACCIDENT", 1),
            ("ACIDENTE", 1),
            ("PROPERTY_DAMAGE", 2),
            ("DANO A PROPRIEDADE", 2),
            ("PROPERTY_LOSS", 3),
            ("PERDA DE PROPRIEDADE", 3),
            ("CARGO_LOSS", 4),
            ("PERDA DE CARGA", 4),
            ("TRAFFIC_TICKET", 5),
            ("MULTA DE TRANSITO", 5),
            ("OTHERS", 6),
            ("OUTROS", 6),
            ("CARGO_DAMAGE", 7),
            ("DANO A CARGA", 7),
            ("CONTRACT", 8),
            ("CONTRATO", 8),
            // no English token exists for this one
            ("PICO DE VELOCIDADE", 17),
        ],
    )
});

pub static OCCURRENCE_STATUS: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(
        OCCURRENCE_STATUS_COLUMN,
        &[
            ("IN_ANALYSIS", 1),
            ("EM ANALISE", 1),
            ("IN_BUDGET", 2),
            ("EM ORCAMENTO", 2),
            ("SELECTING_BUDGET", 3),
            ("SELECIONANDO ORCAMENTO", 3),
            ("WAITING_NF", 4),
            ("AGUARDANDO NF", 4),
            ("NEGOTIATING", 5),
            ("EM NEGOCIACAO", 5),
            ("REFUNDING", 6),
            ("EM REEMBOLSO", 6),
            ("PAID", 7),
            ("PAGO", 7),
            ("EXPIRED", 8),
            ("EXPIRADO", 8),
            ("REJECTED", 9),
            ("REJEITADO", 9),
            ("WAITING_DRIVER_SIGNATURE", 10),
            ("AGUARDANDO ASSINATURA DO MOTORISTA", 10),
            ("REVIEW", 11),
            ("EM REVISAO", 11),
            ("NEGOTIATING_WITH_DRIVER", 12),
            ("NEGOCIANDO COM MOTORISTA", 12),
            ("FINISHED", 13),
            ("CONCLUIDA", 13),
            ("CONCLUÍDA", 13),
        ],
    )
});

/// The three standard tables, in column order.
pub fn standard_tables() -> [&'static LookupTable; 3] {
    [&*COMMUNICATION_TYPE, &*OCCURRENCE_TYPES, &*OCCURRENCE_STATUS]
}
