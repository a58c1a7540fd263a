use sales_prediction_workspace::{forecast_ledger, Item, Sale, SalesLedger};

// Weekly sales for a small building-supply store
fn sample_ledger() -> Result<SalesLedger, Box<dyn std::error::Error>> {
    let catalogue = [
        ("cement", "Portland Cement 50kg", 75000.0, 150),
        ("brick", "Red Brick", 1200.0, 2000),
        ("paint", "Interior Wall Paint 5kg", 125000.0, 75),
        ("pipe", "PVC Pipe 4in 4m", 85000.0, 0),
    ];
    let weekly = [
        ("cement", vec![89.0, 95.0, 85.0, 75.0, 86.0, 100.0]),
        ("brick", vec![1200.0, 1350.0, 980.0, 1100.0, 1420.0]),
        ("paint", vec![12.0, 0.0, 9.0, 14.0]),
        ("pipe", vec![3.0, 5.0]),
    ];

    let items = catalogue
        .iter()
        .map(|&(id, name, price, stock)| Item {
            id: id.to_string(),
            name: name.to_string(),
            price,
            stock,
        })
        .collect();

    let mut sales = Vec::new();
    for (item_id, quantities) in &weekly {
        for (i, &quantity) in quantities.iter().enumerate() {
            sales.push(Sale {
                item_id: item_id.to_string(),
                week: i as u32 + 1,
                quantity,
            });
        }
    }
    // A second sale in week 1 adds to the first
    sales.push(Sale {
        item_id: "paint".to_string(),
        week: 1,
        quantity: 3.0,
    });

    Ok(SalesLedger::new(items, sales)?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SMA Forecast for All Items");
    println!("==========================");

    let ledger = sample_ledger()?;
    let (results, summary) = forecast_ledger(ledger, 3).await?;

    for result in &results {
        println!("{}", result);
    }
    println!("{}", summary);

    Ok(())
}
