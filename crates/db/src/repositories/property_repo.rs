//! Repository for the `properties` table.

use sqlx::{PgExecutor, PgPool};

use basera_core::types::DbId;

use crate::models::property::{
    CreateProperty, Property, PropertyFilter, PropertySort, UpdateProperty,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, price, price_string, details, location, size, bedrooms, bathrooms, \
     description, images, contact_name, contact_email, contact_phone, listing_type, \
     property_type, owner_email, status, sold_out, sold_out_date, created_at, updated_at";

/// Provides CRUD operations for properties plus the filtered public
/// listing query and the one-way sold transition.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    ///
    /// `price_string` is derived by the caller from `input.price`; the two
    /// are stored together so they stay mutually derivable.
    ///
    /// Takes an executor so the insert shares a transaction with the
    /// owner's quota claim.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateProperty,
        price_string: &str,
    ) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (
                title, price, price_string, details, location, size, bedrooms, bathrooms,
                description, images, contact_name, contact_email, contact_phone,
                listing_type, property_type, owner_email
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.title)
            .bind(input.price)
            .bind(price_string)
            .bind(&input.details)
            .bind(&input.location)
            .bind(input.size)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(&input.description)
            .bind(&input.images)
            .bind(&input.contact_name)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(input.listing_type.to_lowercase())
            .bind(&input.property_type)
            .bind(&input.user_email)
            .fetch_one(executor)
            .await
    }

    /// Find a property by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch several properties by ID, in no particular order. Missing ids
    /// are silently absent from the result (used by the wishlist join).
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = ANY($1)");
        sqlx::query_as::<_, Property>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Public listing query: conjunctive optional filters, with sold-out
    /// listings hidden unless asked for.
    pub async fn list(
        pool: &PgPool,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if !filter.include_sold_out.unwrap_or(false) {
            conditions.push("status = 'active'".to_string());
        }
        // "All India" is the location wildcard.
        let location = filter
            .location
            .as_deref()
            .filter(|loc| *loc != "All India");
        if location.is_some() {
            conditions.push(format!("location = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.property_type.is_some() {
            conditions.push(format!("property_type = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.listing_type.is_some() {
            conditions.push(format!("listing_type = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.min_price.is_some() {
            conditions.push(format!("price >= ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.max_price.is_some() {
            conditions.push(format!("price <= ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // Ties break on id so the order is deterministic for equal keys.
        let order_clause = match filter.sort.unwrap_or_default() {
            PropertySort::Newest => "ORDER BY created_at DESC, id DESC",
            PropertySort::PriceAsc => "ORDER BY price ASC, id ASC",
            PropertySort::PriceDesc => "ORDER BY price DESC, id ASC",
        };

        let query = format!("SELECT {COLUMNS} FROM properties {where_clause} {order_clause}");

        let mut q = sqlx::query_as::<_, Property>(&query);

        // Bind dynamic parameters in order.
        if let Some(loc) = location {
            q = q.bind(loc.to_string());
        }
        if let Some(ref property_type) = filter.property_type {
            q = q.bind(property_type);
        }
        if let Some(ref listing_type) = filter.listing_type {
            q = q.bind(listing_type.to_lowercase());
        }
        if let Some(min_price) = filter.min_price {
            q = q.bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            q = q.bind(max_price);
        }

        q.fetch_all(pool).await
    }

    /// List all properties owned by `owner_email`, newest first,
    /// regardless of status.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_email: &str,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM properties
             WHERE owner_email = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(owner_email)
            .fetch_all(pool)
            .await
    }

    /// List every property, newest first. Admin surface.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Property>(&query).fetch_all(pool).await
    }

    /// Update a property. Only non-`None` fields in `input` are applied;
    /// `price_string` must be supplied whenever `input.price` is.
    ///
    /// Ownership is checked by the caller. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
        price_string: Option<&str>,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                title = COALESCE($2, title),
                price = COALESCE($3, price),
                price_string = COALESCE($4, price_string),
                details = COALESCE($5, details),
                location = COALESCE($6, location),
                size = COALESCE($7, size),
                bedrooms = COALESCE($8, bedrooms),
                bathrooms = COALESCE($9, bathrooms),
                description = COALESCE($10, description),
                images = COALESCE($11, images),
                contact_name = COALESCE($12, contact_name),
                contact_email = COALESCE($13, contact_email),
                contact_phone = COALESCE($14, contact_phone),
                listing_type = COALESCE($15, listing_type),
                property_type = COALESCE($16, property_type),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.price)
            .bind(price_string)
            .bind(input.details.as_deref())
            .bind(input.location.as_deref())
            .bind(input.size)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.description.as_deref())
            .bind(input.images.as_ref())
            .bind(input.contact_name.as_deref())
            .bind(input.contact_email.as_deref())
            .bind(input.contact_phone.as_deref())
            .bind(input.listing_type.as_ref().map(|l| l.to_lowercase()))
            .bind(input.property_type.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// One-way sold transition: flags the property sold, stamps the date,
    /// and disables the listing -- only if it is not already sold. The
    /// condition and the write are one UPDATE, so a second caller cannot
    /// slip through between check and commit.
    ///
    /// Returns `None` when the row is missing or already sold; the caller
    /// distinguishes the two.
    pub async fn mark_sold(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                sold_out = TRUE,
                sold_out_date = NOW(),
                status = 'disabled',
                updated_at = NOW()
             WHERE id = $1 AND sold_out = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Administrative status override (unconstrained within the stored
    /// enum). Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a property. Returns `true` if a row was removed.
    ///
    /// Deliberately does NOT decrement the owner's `property_count` or
    /// cascade into wishlist entries; see DESIGN.md.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
