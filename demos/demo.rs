use std::time::Duration;

use zerobounce_client::{Client, CsvFile, EmailToValidate, SANDBOX_IP};

#[tokio::main]
async fn main() -> Result<(), zerobounce_client::Error> {
    let client = Client::from_env()?;

    let credits = client.credits().await?;
    println!("Credits left: {}", credits.credits());

    let result = client.validate("valid@example.com", Some(SANDBOX_IP)).await?;
    println!("{}: {} {}", result.address, result.status, result.sub_status);

    let batch = client
        .validate_batch(&[
            EmailToValidate::new("valid@example.com").with_ip(SANDBOX_IP),
            EmailToValidate::new("invalid@example.com"),
        ])
        .await?;
    for item in &batch.email_batch {
        println!("batch {}: {}", item.address, item.status);
    }
    for error in &batch.errors {
        println!("batch error for {}: {}", error.email_address, error.error);
    }

    // Optional: pass a CSV path to run a bulk validation job.
    if let Some(path) = std::env::args().nth(1) {
        let file = CsvFile::from_path(&path, false, 1)?;
        let submitted = client.bulk_validation_submit(file, true).await?;
        println!("Submitted {} as {}", submitted.file_name, submitted.file_id);

        loop {
            let status = client.bulk_validation_status(&submitted.file_id).await?;
            println!("{}: {}", status.file_status, status.complete_percentage);
            if status.is_complete() {
                break;
            }
            tokio::time::sleep(Duration::from_secs(10)).await;
        }

        let contents = client.bulk_validation_result(&submitted.file_id).await?;
        println!("{}", String::from_utf8_lossy(&contents));
        client.bulk_validation_delete(&submitted.file_id).await?;
    }

    Ok(())
}
