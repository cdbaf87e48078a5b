use crate::db::connection::{init_db, Database};
use crate::errors::ServerError;
use astra::Body;
use rusqlite::params;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh temp-file database with the production schema applied.
pub fn init_test_db(name: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "imoveis_{name}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Row for `insert_listing`; defaults describe an active apartment for sale.
pub struct NewListing {
    pub title: &'static str,
    pub property_type: &'static str,
    pub purpose: &'static str,
    pub neighborhood: &'static str,
    pub city: &'static str,
    pub reference_code: &'static str,
    pub featured: bool,
    pub active: bool,
    pub price: Option<i64>,
    pub created_at: &'static str,
}

impl Default for NewListing {
    fn default() -> Self {
        Self {
            title: "Apartamento 3 quartos",
            property_type: "Apartamento",
            purpose: "venda",
            neighborhood: "Centro",
            city: "João Pessoa",
            reference_code: "AP001",
            featured: false,
            active: true,
            price: Some(420_000),
            created_at: "2024-03-01 12:00:00",
        }
    }
}

pub fn insert_listing(db: &Database, l: &NewListing) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO listings (
                title, property_type, purpose, neighborhood, city, state,
                reference_code, featured, active, price, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, 'PB', ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                l.title,
                l.property_type,
                l.purpose,
                l.neighborhood,
                l.city,
                l.reference_code,
                l.featured,
                l.active,
                l.price,
                l.created_at
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .expect("Failed to insert listing")
}

pub fn set_setting(db: &Database, key: &str, value: &str) {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT OR REPLACE INTO site_settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
    .expect("Failed to store setting");
}

pub fn body_string(body: Body) -> String {
    let mut body = body;
    let mut out = String::new();
    body.reader().read_to_string(&mut out).unwrap();
    out
}
