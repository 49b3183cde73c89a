use family_wealth_backend::config::Config;
use family_wealth_backend::database::{AssetSource, SupabaseClient, UpstreamError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let client = SupabaseClient::new(&config)?;

    println!("🔍 Testing Supabase connection...");
    println!("Endpoint:\n  {}", client.base_url());
    println!("Key:\n  {}", redact_key(&config.supabase_key));

    println!("\n📡 Fetching assets...");

    match client.fetch_assets().await {
        Ok(assets) => {
            let uncategorized = assets.iter().filter(|a| a.category.is_none()).count();
            println!("✅ SUCCESS! Fetched {} assets ({} uncategorized).", assets.len(), uncategorized);
            println!("   The dashboard endpoint should work now. Try running: cargo run");
            Ok(())
        }
        Err(e) => {
            println!("❌ Fetch failed!");
            println!("\nError details:");
            println!("  {}", e);

            match &e {
                UpstreamError::Transport(_) => {
                    println!("\n💡 Suggestions:");
                    println!("  1. Verify your Supabase project is ACTIVE (not paused)");
                    println!("  2. Check the hostname in SUPABASE_URL");
                    println!("  3. Check your internet connection");
                }
                UpstreamError::Status { status, .. } if status.as_u16() == 401 || status.as_u16() == 403 => {
                    println!("\n💡 Suggestions:");
                    println!("  1. Verify SUPABASE_KEY matches the project's API key");
                    println!("  2. Check row level security policies on the assets table");
                }
                UpstreamError::Status { status, .. } if status.as_u16() == 404 => {
                    println!("\n💡 Suggestions:");
                    println!("  1. Make sure the assets and categories tables exist");
                }
                _ => {}
            }

            Err(anyhow::anyhow!("Connection error: {}", e))
        }
    }
}

fn redact_key(key: &str) -> String {
    let visible: String = key.chars().take(6).collect();
    if key.chars().count() <= 6 {
        "********".to_string()
    } else {
        format!("{}********", visible)
    }
}
