use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Payment channel through which a voucher's transaction occurred.
///
/// The store only ever sees these six wire names; anything else is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entidad {
    #[serde(rename = "BCP")]
    Bcp,
    Yape,
    #[serde(rename = "BBVA")]
    Bbva,
    Plin,
    Scotiabank,
    #[serde(rename = "Banco de la nacion")]
    BancoDeLaNacion,
}

impl Entidad {
    /// Every selectable entity, in the order the form offers them.
    pub const ALL: [Entidad; 6] = [
        Entidad::Bcp,
        Entidad::Yape,
        Entidad::Bbva,
        Entidad::Plin,
        Entidad::Scotiabank,
        Entidad::BancoDeLaNacion,
    ];

    /// The exact value the store expects on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entidad::Bcp => "BCP",
            Entidad::Yape => "Yape",
            Entidad::Bbva => "BBVA",
            Entidad::Plin => "Plin",
            Entidad::Scotiabank => "Scotiabank",
            Entidad::BancoDeLaNacion => "Banco de la nacion",
        }
    }

    /// Human label for select options. "Banco de la Nación" keeps its accent
    /// even though the wire value does not.
    pub fn label(&self) -> &'static str {
        match self {
            Entidad::BancoDeLaNacion => "Banco de la Nación",
            other => other.as_str(),
        }
    }

    /// Map a select value back to its variant.
    pub fn from_value(value: &str) -> Option<Entidad> {
        Entidad::ALL.iter().copied().find(|e| e.as_str() == value)
    }
}

impl Default for Entidad {
    fn default() -> Self {
        Entidad::Bcp
    }
}

impl fmt::Display for Entidad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered payment receipt, as returned by the voucher store.
///
/// `(numero_operacion, entidad)` is the natural lookup key; the store is the
/// sole authority on its uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    /// Digits only at the point of submission.
    pub numero_operacion: String,
    pub entidad: Entidad,
    /// Customer identifier (DNI or RUC), digits only.
    pub cliente_dni_ruc: String,
    /// When the underlying payment happened: `yyyy-mm-ddTHH:mm:ss`, no offset.
    pub fecha_hora: String,
    /// When the store registered the record. Backdated payments are allowed,
    /// so this is not ordered against `fecha_hora`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterVoucherRequest {
    pub numero_operacion: String,
    pub entidad: Entidad,
    pub cliente_dni_ruc: String,
    pub fecha_hora: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterVoucherResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVoucherRequest {
    pub numero_operacion: String,
    pub entidad: Entidad,
}

/// Failure modes of a voucher store call, as seen by the workflows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Non-success status; carries the body's `message` field when one was
    /// present.
    #[error("voucher store rejected the request")]
    Rejected { message: Option<String> },
    /// Network failure or unparsable response.
    #[error("voucher store unreachable: {0}")]
    Unreachable(String),
}

pub const GENERIC_SAVED_MESSAGE: &str = "Se guardó correctamente";
pub const GENERIC_REJECTED_MESSAGE: &str = "Ocurrió un error al guardar el voucher";
pub const CONNECTION_FAILED_MESSAGE: &str = "No se pudo conectar con el servidor";
pub const VOUCHER_NOT_FOUND_MESSAGE: &str =
    "No se encontró el voucher con el numero de operación y entidad proporcionados";

/// What the register workflow does with a store response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Show the confirmation and reset the form to its defaults.
    Saved { message: String },
    /// Show the failure and keep the fields for a retry.
    Rejected { message: String },
}

/// Decide how a register submission's result is surfaced. The store's own
/// message wins whenever it sent one.
pub fn register_outcome(result: Result<RegisterVoucherResponse, StoreError>) -> RegisterOutcome {
    match result {
        Ok(response) => RegisterOutcome::Saved {
            message: response
                .message
                .unwrap_or_else(|| GENERIC_SAVED_MESSAGE.to_string()),
        },
        Err(StoreError::Rejected { message }) => RegisterOutcome::Rejected {
            message: message.unwrap_or_else(|| GENERIC_REJECTED_MESSAGE.to_string()),
        },
        Err(StoreError::Unreachable(_)) => RegisterOutcome::Rejected {
            message: CONNECTION_FAILED_MESSAGE.to_string(),
        },
    }
}

/// Decide how a lookup's result is surfaced. Unlike registration, the store's
/// error body is not shown here; any rejection reads as not-found.
pub fn search_outcome(result: Result<Voucher, StoreError>) -> Result<Voucher, String> {
    match result {
        Ok(voucher) => Ok(voucher),
        Err(StoreError::Rejected { .. }) => Err(VOUCHER_NOT_FOUND_MESSAGE.to_string()),
        Err(StoreError::Unreachable(_)) => Err(CONNECTION_FAILED_MESSAGE.to_string()),
    }
}

/// Keep only decimal digits, preserving their relative order. Never fails;
/// an all-junk input collapses to the empty string.
pub fn sanitize_numeric(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Combine a `yyyy-mm-dd` date and an `HH:mm` time into the wire timestamp.
/// Seconds are always zero at creation.
pub fn compose_fecha_hora(fecha: &str, hora: &str) -> String {
    format!("{}T{}:00", fecha, hora)
}

/// Most recent transaction first. Wire timestamps are zero-padded, so string
/// order is chronological order. Equal timestamps keep no particular order.
pub fn sort_descending(mut vouchers: Vec<Voucher>) -> Vec<Voucher> {
    vouchers.sort_unstable_by(|a, b| b.fecha_hora.cmp(&a.fecha_hora));
    vouchers
}

/// Partition an already-sorted list into calendar-day buckets keyed by the
/// es-PE day heading. A single stable pass, so the input order survives both
/// across buckets and within each bucket.
pub fn group_by_calendar_day(vouchers: &[Voucher]) -> Vec<(String, Vec<Voucher>)> {
    let mut groups: Vec<(String, Vec<Voucher>)> = Vec::new();
    for voucher in vouchers {
        let dia = format_day_es_pe(&voucher.fecha_hora);
        match groups.iter_mut().find(|(key, _)| *key == dia) {
            Some((_, bucket)) => bucket.push(voucher.clone()),
            None => groups.push((dia, vec![voucher.clone()])),
        }
    }
    groups
}

fn parse_fecha_hora(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        12 => "diciembre",
        _ => "enero",
    }
}

/// es-PE long calendar day, e.g. `1 de junio de 2024`. Display only; stored
/// values stay machine timestamps. Unparsable input falls through untouched.
pub fn format_day_es_pe(fecha_hora: &str) -> String {
    match parse_fecha_hora(fecha_hora) {
        Some(dt) => format!(
            "{} de {} de {}",
            dt.day(),
            month_name_es(dt.month()),
            dt.year()
        ),
        None => fecha_hora.to_string(),
    }
}

/// es-PE timestamp for display, day first: `01/06/2024 09:15:00`.
pub fn format_datetime_es_pe(value: &str) -> String {
    match parse_fecha_hora(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => value.to_string(),
    }
}

/// Time-of-day portion for the grouped listing, `HH:MM`.
pub fn format_hora(fecha_hora: &str) -> String {
    match parse_fecha_hora(fecha_hora) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => fecha_hora.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voucher(id: &str, fecha_hora: &str) -> Voucher {
        Voucher {
            id: id.to_string(),
            numero_operacion: "12345".to_string(),
            entidad: Entidad::Bcp,
            cliente_dni_ruc: "70001122".to_string(),
            fecha_hora: fecha_hora.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_sanitize_numeric_keeps_digit_subsequence() {
        assert_eq!(sanitize_numeric("12a34-56 78"), "12345678");
        assert_eq!(sanitize_numeric("abc"), "");
        assert_eq!(sanitize_numeric(""), "");
        assert_eq!(sanitize_numeric("00123"), "00123");
    }

    #[test]
    fn test_sanitize_numeric_is_idempotent() {
        let once = sanitize_numeric("9-8.7 6x5");
        assert_eq!(sanitize_numeric(&once), once);
    }

    #[test]
    fn test_compose_fecha_hora() {
        assert_eq!(
            compose_fecha_hora("2024-05-01", "14:30"),
            "2024-05-01T14:30:00"
        );
    }

    #[test]
    fn test_sort_descending_most_recent_first() {
        let sorted = sort_descending(vec![
            voucher("1", "2024-01-02T10:00:00"),
            voucher("2", "2024-01-03T09:00:00"),
            voucher("3", "2024-01-01T00:00:00"),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }

    #[test]
    fn test_group_by_calendar_day_follows_sorted_order() {
        let sorted = sort_descending(vec![
            voucher("1", "2024-01-02T10:00:00"),
            voucher("2", "2024-01-03T09:00:00"),
            voucher("3", "2024-01-01T00:00:00"),
        ]);
        let groups = group_by_calendar_day(&sorted);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, "3 de enero de 2024");
        assert_eq!(groups[1].0, "2 de enero de 2024");
        assert_eq!(groups[2].0, "1 de enero de 2024");
        assert!(groups.iter().all(|(_, bucket)| bucket.len() == 1));
    }

    #[test]
    fn test_group_by_calendar_day_same_day_accumulates() {
        let sorted = sort_descending(vec![
            voucher("1", "2024-06-01T09:15:00"),
            voucher("2", "2024-06-01T18:40:00"),
            voucher("3", "2024-05-31T23:59:00"),
        ]);
        let groups = group_by_calendar_day(&sorted);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "1 de junio de 2024");
        let ids: Vec<&str> = groups[0].1.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(groups[1].0, "31 de mayo de 2024");
    }

    #[test]
    fn test_entidad_wire_names() {
        assert_eq!(
            serde_json::to_string(&Entidad::BancoDeLaNacion).unwrap(),
            "\"Banco de la nacion\""
        );
        let parsed: Entidad = serde_json::from_str("\"BBVA\"").unwrap();
        assert_eq!(parsed, Entidad::Bbva);
    }

    #[test]
    fn test_entidad_from_value_covers_every_option() {
        for entidad in Entidad::ALL {
            assert_eq!(Entidad::from_value(entidad.as_str()), Some(entidad));
        }
        assert_eq!(Entidad::from_value("Interbank"), None);
    }

    #[test]
    fn test_voucher_wire_field_names() {
        let json = r#"{
            "id": "42",
            "numeroOperacion": "12345",
            "entidad": "Yape",
            "clienteDniRuc": "70001122",
            "fechaHora": "2024-06-01T09:15:00",
            "createdAt": "2024-06-01T09:16:03"
        }"#;
        let parsed: Voucher = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.numero_operacion, "12345");
        assert_eq!(parsed.entidad, Entidad::Yape);
        assert_eq!(parsed.created_at.as_deref(), Some("2024-06-01T09:16:03"));
    }

    #[test]
    fn test_voucher_created_at_is_optional() {
        let json = r#"{
            "id": "42",
            "numeroOperacion": "12345",
            "entidad": "BCP",
            "clienteDniRuc": "70001122",
            "fechaHora": "2024-06-01T09:15:00"
        }"#;
        let parsed: Voucher = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.created_at, None);
    }

    #[test]
    fn test_register_request_wire_field_names() {
        let request = RegisterVoucherRequest {
            numero_operacion: "12345".to_string(),
            entidad: Entidad::Yape,
            cliente_dni_ruc: "70001122".to_string(),
            fecha_hora: compose_fecha_hora("2024-06-01", "09:15"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["numeroOperacion"], "12345");
        assert_eq!(json["entidad"], "Yape");
        assert_eq!(json["clienteDniRuc"], "70001122");
        assert_eq!(json["fechaHora"], "2024-06-01T09:15:00");
    }

    #[test]
    fn test_register_outcome_uses_store_message_on_success() {
        let outcome = register_outcome(Ok(RegisterVoucherResponse {
            message: Some("ok".to_string()),
        }));
        assert_eq!(
            outcome,
            RegisterOutcome::Saved {
                message: "ok".to_string()
            }
        );
    }

    #[test]
    fn test_register_outcome_generic_success_message() {
        let outcome = register_outcome(Ok(RegisterVoucherResponse { message: None }));
        assert_eq!(
            outcome,
            RegisterOutcome::Saved {
                message: GENERIC_SAVED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_register_outcome_surfaces_rejection_message() {
        let outcome = register_outcome(Err(StoreError::Rejected {
            message: Some("duplicate".to_string()),
        }));
        assert_eq!(
            outcome,
            RegisterOutcome::Rejected {
                message: "duplicate".to_string()
            }
        );
    }

    #[test]
    fn test_register_outcome_generic_rejection_message() {
        let outcome = register_outcome(Err(StoreError::Rejected { message: None }));
        assert_eq!(
            outcome,
            RegisterOutcome::Rejected {
                message: GENERIC_REJECTED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_register_outcome_connectivity_message() {
        let outcome = register_outcome(Err(StoreError::Unreachable("timeout".to_string())));
        assert_eq!(
            outcome,
            RegisterOutcome::Rejected {
                message: CONNECTION_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_search_outcome_returns_voucher() {
        let found = voucher("42", "2024-06-01T09:15:00");
        assert_eq!(search_outcome(Ok(found.clone())), Ok(found));
    }

    #[test]
    fn test_search_outcome_not_found_is_fixed_message() {
        // the store's own error body is never surfaced on this path
        let result = search_outcome(Err(StoreError::Rejected {
            message: Some("clave duplicada".to_string()),
        }));
        assert_eq!(result, Err(VOUCHER_NOT_FOUND_MESSAGE.to_string()));
    }

    #[test]
    fn test_search_outcome_connectivity_message() {
        let result = search_outcome(Err(StoreError::Unreachable("offline".to_string())));
        assert_eq!(result, Err(CONNECTION_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn test_format_day_es_pe() {
        assert_eq!(format_day_es_pe("2024-06-01T09:15:00"), "1 de junio de 2024");
        assert_eq!(format_day_es_pe("garbage"), "garbage");
    }

    #[test]
    fn test_format_datetime_es_pe() {
        assert_eq!(
            format_datetime_es_pe("2024-06-01T09:15:00"),
            "01/06/2024 09:15:00"
        );
        assert_eq!(
            format_datetime_es_pe("2024-06-01T09:16:03.250"),
            "01/06/2024 09:16:03"
        );
        assert_eq!(format_datetime_es_pe("no-date"), "no-date");
    }

    #[test]
    fn test_format_hora() {
        assert_eq!(format_hora("2024-06-01T09:15:00"), "09:15");
    }
}
