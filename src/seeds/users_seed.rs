use crate::database::UserStore;
use crate::models::{Role, User};
use crate::utils::{hash_password, AppError};

/// Candidate user with a plaintext password, hashed at seed time.
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub roles: &'static [Role],
}

pub const DEFAULT_USERS: [SeedUser; 2] = [
    SeedUser {
        username: "admin",
        email: "admin@example.com",
        password: "admin123",
        roles: &[Role::Admin],
    },
    SeedUser {
        username: "user1",
        email: "user1@example.com",
        password: "user123",
        roles: &[Role::User],
    },
];

impl SeedUser {
    fn to_user(self, bcrypt_cost: u32) -> Result<User, AppError> {
        let password_hash = hash_password(self.password, bcrypt_cost)?;
        Ok(User::new(self.username, self.email, password_hash, self.roles))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Seed dos usuários padrão. Só insere quem ainda não existe (chave: email).
pub async fn seed_default_users<S>(store: &S, bcrypt_cost: u32) -> Result<SeedReport, AppError>
where
    S: UserStore + ?Sized,
{
    seed_users(store, &DEFAULT_USERS, bcrypt_cost).await
}

pub async fn seed_users<S>(
    store: &S,
    candidates: &[SeedUser],
    bcrypt_cost: u32,
) -> Result<SeedReport, AppError>
where
    S: UserStore + ?Sized,
{
    log::info!("🌱 Users: seeding {} default users...", candidates.len());

    store.ensure_email_index().await?;

    let mut report = SeedReport::default();

    for candidate in candidates {
        let user = candidate.to_user(bcrypt_cost)?;

        if store.insert_if_absent(&user).await? {
            log::info!("   ✅ Inserted user {} <{}>", user.username, user.email);
            report.inserted += 1;
        } else {
            log::info!("   ⏭️  User <{}> already exists — skipping", user.email);
            report.skipped += 1;
        }
    }

    log::info!(
        "✅ Seed data inserted ({} new, {} already present)",
        report.inserted,
        report.skipped
    );

    Ok(report)
}
