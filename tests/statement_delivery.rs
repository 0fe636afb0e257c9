use fractic_statement_delivery::{
    config::DisplayConfig,
    entities::{
        customer_id, rep_id, DeliveryChannel, DeliveryRecord, FilterCriteria, NormalizedStatus,
        SendMode, StatusCounts, TerminalEvent,
    },
    util::StatementDeliveryUtil,
};

const DELIVERIES_CSV: &str = "\
customer_id,name,customer_number,email,rep_id,representative,customer_type,balance,currency,channel,status,sent_at,confirmed_at,failed_at,failure_reason
1,ROUTE 2 MINI MART - GUYANDOTTE,0901008013,manager@route2mini.com,rep1,Sarah Johnson,Independent,525.42,USD,email,sent,2024-01-15T10:30:00Z,2024-01-15T10:32:15Z,,
2,BLISSFIELD PARTY MART,0901000074,orders@blissfieldparty.com,rep2,Mike Chen,Bill-To,159.00,USD,mail,manual mailing required,2024-01-15T10:30:00Z,,,
3,ERIE FOODS,0902000013,accounting@eriefoods.com,rep1,Sarah Johnson,Bill-To,248.35,USD,email,processing,2024-01-15T10:30:00Z,,,
4,SAUTTER'S FOODS - WATERVILLE,0902000023,manager@sauttersfoods.com,rep3,Lisa Rodriguez,Independent,\"1,008.32\",USD,mail,forwarded,2024-01-15T10:30:00Z,2024-01-20T09:00:00Z,,
5,IN & OUT #54 BERDAN,0957330054,store54@inandout.com,rep2,Mike Chen,Chain,134.69,USD,email,bounced,2024-01-14T09:15:00Z,,2024-01-14T09:17:22Z,Mailbox full
6,WARRIOR SOCCER CLUB,0311000014,treasurer@warriorsoccer.com,rep2,Mike Chen,Independent,215.00,USD,email,processing,,,,
";

async fn dashboard() -> (StatementDeliveryUtil, Vec<DeliveryRecord>) {
    let util = StatementDeliveryUtil::new();
    let records = util.records_from_string(DELIVERIES_CSV).await.unwrap();
    (util, records)
}

fn ids(views: &[fractic_statement_delivery::entities::NotificationView]) -> Vec<&str> {
    views.iter().map(|v| v.customer_id.as_str()).collect()
}

#[tokio::test]
async fn loads_and_classifies_every_record() {
    let (util, records) = dashboard().await;
    let statuses: Vec<NormalizedStatus> = records.iter().map(|r| util.classify(r)).collect();
    assert_eq!(
        statuses,
        vec![
            NormalizedStatus::Delivered,
            NormalizedStatus::ManualMailingRequired,
            NormalizedStatus::Pending,
            NormalizedStatus::Delivered,
            NormalizedStatus::Failed,
            NormalizedStatus::Pending,
        ]
    );
}

#[tokio::test]
async fn labels_depend_on_channel() {
    let (util, records) = dashboard().await;
    assert_eq!(util.project_notification(&records[0]).display_label, "Delivered");
    assert_eq!(util.project_notification(&records[3]).display_label, "Forwarded");
    assert_eq!(util.project_notification(&records[4]).display_label, "Bounced");
    assert_eq!(
        util.project_notification(&records[4]).reason.as_deref(),
        Some("Mailbox full")
    );
}

#[tokio::test]
async fn notifications_are_most_recent_first() {
    let (util, records) = dashboard().await;
    let views = util.filter_notifications(&records, &FilterCriteria::new());
    assert_eq!(ids(&views), vec!["4", "1", "2", "3", "5", "6"]);
    assert!(views.last().unwrap().display_timestamp.is_none());
}

#[tokio::test]
async fn filtering_is_idempotent_and_leaves_input_alone() {
    let (util, records) = dashboard().await;
    let before = records.clone();
    let criteria = FilterCriteria::new()
        .search("mike")
        .representative(rep_id("rep2"));
    let once = util.filter_notifications(&records, &criteria);
    let twice = util.refine_notifications(&once, &criteria);
    assert_eq!(ids(&once), vec!["2", "5", "6"]);
    assert_eq!(once, twice);
    assert_eq!(records, before);
}

#[tokio::test]
async fn aggregates_scoped_and_global() {
    let (util, records) = dashboard().await;
    let global = util.aggregate(&records, None);
    assert_eq!(
        global,
        StatusCounts {
            total: 6,
            delivered_or_forwarded: 2,
            bounced_or_incomplete: 1,
        }
    );

    let scope = FilterCriteria::new().representative(rep_id("rep2"));
    let counts = util.aggregate_with_global(&records, &scope);
    assert_eq!(counts.global, global);
    assert_eq!(
        counts.scoped,
        StatusCounts {
            total: 3,
            delivered_or_forwarded: 0,
            bounced_or_incomplete: 1,
        }
    );

    let summary = util.status_summary(&counts);
    assert_eq!(summary.total, "3 (6)");
    assert_eq!(summary.bounced_or_incomplete, "1 (1)");

    let reps = util.representatives(&records);
    assert_eq!(
        util.active_filters(&scope, &reps),
        " • Filtered by Rep: Mike Chen"
    );
}

#[tokio::test]
async fn sent_email_with_manual_mailing() {
    let util = StatementDeliveryUtil::new();
    let csv = "\
customer_id,name,customer_number,email,rep_id,representative,customer_type,balance,currency,channel,status,sent_at,confirmed_at,failed_at,failure_reason
1,ROUTE 2 MINI MART,0901008013,manager@route2mini.com,rep1,Sarah Johnson,Independent,525.42,USD,email,sent,2024-01-15T10:32:00Z,,,
2,MARSHALLS,0301002116,finance@marshalls.com,rep1,Sarah Johnson,Chain,1023.22,USD,mail,manual mailing required,,,,
";
    let records = util.records_from_string(csv).await.unwrap();
    assert_eq!(
        util.aggregate(&records, None),
        StatusCounts {
            total: 2,
            delivered_or_forwarded: 1,
            bounced_or_incomplete: 0,
        }
    );
}

#[tokio::test]
async fn undefined_status_is_a_configuration_error() {
    let util = StatementDeliveryUtil::new();
    assert!(util.classify_raw(DeliveryChannel::Email, "forwarded").is_err());
    assert_eq!(
        util.classify_raw(DeliveryChannel::PhysicalMail, "forwarded").unwrap(),
        NormalizedStatus::Delivered
    );
    assert_eq!(util.label_for_raw("email", "forwarded"), "Unknown");
    assert_eq!(util.label_for_raw("fax", "sent"), "Unknown");
    assert_eq!(util.label_for_raw("mail", "forwarded"), "Forwarded");

    let custom = StatementDeliveryUtil::with_config(
        DisplayConfig::from_ron_str(r#"(unknown_label: "?")"#).unwrap(),
    );
    assert_eq!(custom.label_for_raw("email", "forwarded"), "?");
}

#[tokio::test]
async fn conflicting_outcome_is_a_data_integrity_error() {
    let util = StatementDeliveryUtil::new();
    let csv = "\
customer_id,name,customer_number,email,rep_id,representative,customer_type,balance,currency,channel,status,sent_at,confirmed_at,failed_at,failure_reason
1,ROUTE 2 MINI MART,0901008013,manager@route2mini.com,rep1,Sarah Johnson,Independent,525.42,USD,email,sent,2024-01-15T10:30:00Z,2024-01-15T10:32:00Z,2024-01-15T10:33:00Z,Mailbox full
";
    assert!(util.records_from_string(csv).await.is_err());
}

#[tokio::test]
async fn status_contradicting_its_timestamps_is_a_data_integrity_error() {
    let util = StatementDeliveryUtil::new();
    let header = "customer_id,name,customer_number,email,rep_id,representative,customer_type,balance,currency,channel,status,sent_at,confirmed_at,failed_at,failure_reason\n";
    let sent_but_failed = format!(
        "{}{}",
        header,
        "1,ROUTE 2 MINI MART,0901008013,manager@route2mini.com,rep1,Sarah Johnson,Independent,525.42,USD,email,sent,2024-01-15T10:30:00Z,,2024-01-16T00:00:00Z,Mailbox full\n",
    );
    assert!(util.records_from_string(&sent_but_failed).await.is_err());

    let processing_but_confirmed = format!(
        "{}{}",
        header,
        "2,BLISSFIELD PARTY MART,0901000074,orders@blissfieldparty.com,rep2,Mike Chen,Bill-To,159.00,USD,mail,processing,2024-01-15T10:30:00Z,2024-01-17T00:00:00Z,,\n",
    );
    assert!(util
        .records_from_string(&processing_but_confirmed)
        .await
        .is_err());
}

#[tokio::test]
async fn duplicate_customers_are_rejected() {
    let util = StatementDeliveryUtil::new();
    let csv = "\
customer_id,name,customer_number,email,rep_id,representative,customer_type,balance,currency,channel,status,sent_at,confirmed_at,failed_at,failure_reason
1,ERIE FOODS,0902000013,accounting@eriefoods.com,rep1,Sarah Johnson,Bill-To,248.35,USD,email,processing,,,,
1,ERIE FOODS,0902000013,accounting@eriefoods.com,rep1,Sarah Johnson,Bill-To,248.35,USD,email,processing,,,,
";
    assert!(util.records_from_string(csv).await.is_err());
}

#[tokio::test]
async fn lifecycle_updates_the_views() {
    let (util, records) = dashboard().await;
    let erie = &records[2];
    let bounced = erie
        .apply(TerminalEvent::Bounced {
            at: "2024-01-21T08:00:00Z".parse().unwrap(),
            reason: "Unknown recipient".to_string(),
        })
        .unwrap();
    let updated: Vec<DeliveryRecord> = records
        .iter()
        .map(|r| {
            if r.customer_id() == bounced.customer_id() {
                bounced.clone()
            } else {
                r.clone()
            }
        })
        .collect();
    let views = util.filter_notifications(&updated, &FilterCriteria::new());
    assert_eq!(views[0].customer_id.as_str(), "3");
    assert_eq!(views[0].reason.as_deref(), Some("Unknown recipient"));
    assert_eq!(util.aggregate(&updated, None).bounced_or_incomplete, 2);
    assert_eq!(
        util.status_tooltip(&bounced),
        "Sent: 2024-01-15 10:30 UTC\nBounced: 2024-01-21 08:00 UTC\nReason: Unknown recipient"
    );
}

#[tokio::test]
async fn resending_to_selected_customers() {
    let (util, records) = dashboard().await;
    let criteria = FilterCriteria::new().representative(rep_id("rep2"));
    let mode = SendMode::Selected(vec![customer_id("5"), customer_id("1")]);
    let resent = util.initiate_deliveries(
        &records,
        &criteria,
        &mode,
        "2024-02-01T09:00:00Z".parse().unwrap(),
    );
    // Customer 1 belongs to another representative.
    assert_eq!(resent.len(), 1);
    assert_eq!(resent[0].customer_id().as_str(), "5");
    assert_eq!(util.classify(&resent[0]), NormalizedStatus::Pending);

    let updated: Vec<DeliveryRecord> = records
        .iter()
        .map(|r| {
            resent
                .iter()
                .find(|n| n.customer_id() == r.customer_id())
                .unwrap_or(r)
                .clone()
        })
        .collect();
    let views = util.filter_notifications(&updated, &FilterCriteria::new());
    assert_eq!(views[0].customer_id.as_str(), "5");
    assert_eq!(views[0].display_label, "Processing");
    assert_eq!(util.aggregate(&updated, None).bounced_or_incomplete, 0);
}

#[tokio::test]
async fn rows_and_json() {
    let (util, records) = dashboard().await;
    let views = util.filter_notifications(&records, &FilterCriteria::new());
    let rows = util.notification_rows(&views);
    assert_eq!(rows[0].balance, "$1,008.32");
    assert_eq!(rows[0].status, "Forwarded");
    assert_eq!(rows[0].timestamp, "2024-01-20 09:00 UTC");
    assert_eq!(rows[5].timestamp, "N/A");

    let json = util.notifications_json(&views).unwrap();
    assert!(json.contains("\"customerName\": \"WARRIOR SOCCER CLUB\""));
}

#[tokio::test]
async fn loads_from_file() {
    let path = std::env::temp_dir().join(format!(
        "statement-deliveries-{}.csv",
        std::process::id()
    ));
    tokio::fs::write(&path, DELIVERIES_CSV).await.unwrap();
    let util = StatementDeliveryUtil::new();
    let records = util.records_from_file(&path).await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();
    assert_eq!(records.len(), 6);

    assert!(util
        .records_from_file(std::env::temp_dir().join("no-such-deliveries.csv"))
        .await
        .is_err());
}
