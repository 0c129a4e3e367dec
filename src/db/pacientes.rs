use rusqlite::{params, Connection};
use serde::Deserialize;

use crate::db::DatabaseError;

/// Intake payload, exactly as the registration form posts it.
#[derive(Debug, Clone, Deserialize)]
pub struct NuevoPaciente {
    pub nombre: String,
    pub cedula: String,
    pub telefono: String,
    pub correo: String,
}

pub fn insert_paciente(conn: &Connection, paciente: &NuevoPaciente) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO pacientes (nombre, cedula, telefono, correo)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            paciente.nombre,
            paciente.cedula,
            paciente.telefono,
            paciente.correo,
        ],
    )?;
    Ok(())
}

pub fn count_pacientes(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM pacientes", [], |row| row.get(0))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn intake() -> NuevoPaciente {
        NuevoPaciente {
            nombre: "María González".into(),
            cedula: "12345678".into(),
            telefono: "+1234567890".into(),
            correo: "maria@email.com".into(),
        }
    }

    #[test]
    fn insert_and_count() {
        let conn = open_memory_database().unwrap();
        insert_paciente(&conn, &intake()).unwrap();
        assert_eq!(count_pacientes(&conn).unwrap(), 1);
    }

    #[test]
    fn duplicate_submissions_create_duplicate_rows() {
        let conn = open_memory_database().unwrap();
        insert_paciente(&conn, &intake()).unwrap();
        insert_paciente(&conn, &intake()).unwrap();
        assert_eq!(count_pacientes(&conn).unwrap(), 2);
    }

    #[test]
    fn stored_values_survive_round_trip() {
        let conn = open_memory_database().unwrap();
        insert_paciente(&conn, &intake()).unwrap();

        let (nombre, correo): (String, String) = conn
            .query_row("SELECT nombre, correo FROM pacientes LIMIT 1", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(nombre, "María González");
        assert_eq!(correo, "maria@email.com");
    }
}
