//! Black-box purchase scenarios driven through `TicketService` with recording
//! collaborators.

use std::sync::Arc;
use std::thread;

use boxoffice_core::{AccountId, PurchaseRejection};
use boxoffice_ticketing::{
    PaymentCall, PurchaseRequest, RecordingPaymentService, RecordingSeatReservationService,
    ReservationCall, TicketService, TicketType, TicketTypeRequest,
};

type Service = TicketService<RecordingPaymentService, RecordingSeatReservationService>;

fn service() -> Service {
    TicketService::new(
        RecordingPaymentService::new(),
        RecordingSeatReservationService::new(),
    )
}

fn adult(count: i32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, count)
}

fn child(count: i32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, count)
}

fn infant(count: i32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, count)
}

fn account(raw: i64) -> AccountId {
    AccountId::new(raw).unwrap()
}

/// Run a purchase that must be rejected and check nothing was dispatched.
fn assert_rejected(request: PurchaseRequest, expected: PurchaseRejection) {
    let service = service();
    let err = service.purchase_tickets(&request).unwrap_err();

    assert_eq!(err.rejection(), Some(expected), "request: {request:?}");
    assert_eq!(err.to_string(), expected.to_string());
    assert!(service.payments().calls().is_empty());
    assert!(service.reservations().calls().is_empty());
}

fn assert_dispatched(request: PurchaseRequest, amount: u32, seats: u32) {
    let service = service();
    let receipt = service.purchase_tickets(&request).unwrap();
    let account_id = AccountId::from_optional(request.account_id).unwrap();

    assert_eq!(receipt.amount_paid, amount);
    assert_eq!(receipt.seats_reserved, seats);
    assert_eq!(
        service.payments().calls(),
        vec![PaymentCall { account_id, amount }]
    );
    assert_eq!(
        service.reservations().calls(),
        vec![ReservationCall { account_id, seats }]
    );
}

#[test]
fn one_adult_pays_one_fare_and_reserves_one_seat() {
    assert_dispatched(PurchaseRequest::new(1, [adult(1)]), 25, 1);
}

#[test]
fn mixed_party_with_infant_on_a_lap() {
    assert_dispatched(PurchaseRequest::new(1, [adult(2), child(1), infant(1)]), 65, 3);
}

#[test]
fn repeated_adult_lines_are_summed() {
    assert_dispatched(
        PurchaseRequest::new(1, [adult(2), child(1), infant(1), adult(1)]),
        90,
        4,
    );
}

#[test]
fn exactly_twenty_five_tickets_is_accepted() {
    assert_dispatched(PurchaseRequest::new(1, [adult(20), child(3), infant(2)]), 545, 23);
}

#[test]
fn child_without_adult_is_rejected() {
    assert_rejected(
        PurchaseRequest::new(1, [child(1)]),
        PurchaseRejection::AdultRequired,
    );
}

#[test]
fn infant_without_adult_is_rejected() {
    assert_rejected(
        PurchaseRequest::new(1, [infant(1)]),
        PurchaseRejection::AdultRequired,
    );
}

#[test]
fn zero_account_id_is_rejected() {
    assert_rejected(
        PurchaseRequest::new(0, [adult(1)]),
        PurchaseRejection::InvalidAccountId,
    );
}

#[test]
fn missing_account_id_is_rejected() {
    let request = PurchaseRequest {
        account_id: None,
        ..PurchaseRequest::new(1, [adult(1)])
    };
    assert_rejected(request, PurchaseRejection::InvalidAccountId);
}

#[test]
fn more_infants_than_adults_is_rejected() {
    assert_rejected(
        PurchaseRequest::new(1, [adult(1), infant(2)]),
        PurchaseRejection::NotEnoughAdultsForInfants,
    );
}

#[test]
fn infants_split_over_lines_still_need_adults() {
    assert_rejected(
        PurchaseRequest::new(1, [adult(1), infant(1), infant(1)]),
        PurchaseRejection::NotEnoughAdultsForInfants,
    );
}

#[test]
fn zero_and_negative_counts_are_rejected() {
    for count in [0, -1] {
        assert_rejected(
            PurchaseRequest::new(1, [adult(count)]),
            PurchaseRejection::InvalidTicketCount,
        );
    }
}

#[test]
fn single_line_of_twenty_six_is_an_invalid_count() {
    assert_rejected(
        PurchaseRequest::new(1, [adult(26)]),
        PurchaseRejection::InvalidTicketCount,
    );
}

#[test]
fn twenty_six_tickets_over_several_lines_is_too_many() {
    assert_rejected(
        PurchaseRequest::new(1, [adult(25), infant(1), child(1)]),
        PurchaseRejection::TooManyTickets,
    );
}

#[test]
fn untyped_request_is_rejected() {
    assert_rejected(
        PurchaseRequest::new(1, [TicketTypeRequest::untyped(1)]),
        PurchaseRejection::InvalidTicketType,
    );
}

#[test]
fn null_entry_after_a_valid_one_is_rejected() {
    let request = PurchaseRequest {
        account_id: Some(1),
        items: Some(vec![Some(adult(1)), None]),
    };
    assert_rejected(request, PurchaseRejection::InvalidTicketRequest);
}

#[test]
fn missing_or_empty_item_list_is_rejected() {
    assert_rejected(
        PurchaseRequest {
            account_id: Some(1),
            items: None,
        },
        PurchaseRejection::InvalidTicketRequest,
    );
    assert_rejected(
        PurchaseRequest::new(1, Vec::<TicketTypeRequest>::new()),
        PurchaseRejection::InvalidTicketRequest,
    );
}

#[test]
fn structural_error_later_in_list_beats_the_limit() {
    assert_rejected(
        PurchaseRequest::new(1, [adult(25), child(25), TicketTypeRequest::untyped(1)]),
        PurchaseRejection::InvalidTicketType,
    );
}

#[test]
fn repeating_a_rejected_purchase_gives_the_same_reason() {
    let service = service();
    let request = PurchaseRequest::new(1, [adult(1), infant(2)]);

    let first = service.purchase_tickets(&request).unwrap_err().rejection();
    let second = service.purchase_tickets(&request).unwrap_err().rejection();

    assert_eq!(first, Some(PurchaseRejection::NotEnoughAdultsForInfants));
    assert_eq!(first, second);
    assert!(service.payments().calls().is_empty());
}

#[test]
fn repeating_a_valid_purchase_dispatches_the_same_totals() {
    let service = service();
    let request = PurchaseRequest::new(4, [adult(1), child(2)]);

    let first = service.purchase_tickets(&request).unwrap();
    let second = service.purchase_tickets(&request).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        service.payments().calls(),
        vec![PaymentCall { account_id: account(4), amount: 55 }; 2]
    );
}

#[test]
fn request_from_json_document() {
    let request: PurchaseRequest = serde_json::from_str(
        r#"{
            "account_id": 9,
            "items": [
                {"type": "ADULT", "count": 2},
                {"type": "child", "count": 2},
                {"type": "INFANT", "count": 1}
            ]
        }"#,
    )
    .unwrap();

    assert_dispatched(request, 80, 4);
}

#[test]
fn unknown_type_in_json_is_an_invalid_type() {
    let request: PurchaseRequest = serde_json::from_str(
        r#"{"account_id": 9, "items": [{"type": "ADULT", "count": 1}, {"type": "SENIOR", "count": 1}]}"#,
    )
    .unwrap();

    assert_rejected(request, PurchaseRejection::InvalidTicketType);
}

#[test]
fn concurrent_purchases_share_one_service() {
    let service = Arc::new(service());

    let handles: Vec<_> = (1..=8)
        .map(|id| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                service
                    .purchase_tickets(&PurchaseRequest::new(id, [adult(1), child(1)]))
                    .map(|receipt| receipt.amount_paid)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 40);
    }

    let mut paid: Vec<i64> = service
        .payments()
        .calls()
        .iter()
        .map(|c| c.account_id.get())
        .collect();
    paid.sort_unstable();
    assert_eq!(paid, (1..=8).collect::<Vec<_>>());
    assert_eq!(service.reservations().calls().len(), 8);
}

#[test]
fn shared_collaborators_through_arc() {
    let payments = Arc::new(RecordingPaymentService::new());
    let reservations = Arc::new(RecordingSeatReservationService::new());
    let box_office = TicketService::new(Arc::clone(&payments), Arc::clone(&reservations));
    let late_window = TicketService::new(Arc::clone(&payments), Arc::clone(&reservations));

    box_office
        .purchase_tickets(&PurchaseRequest::new(1, [adult(1)]))
        .unwrap();
    late_window
        .purchase_tickets(&PurchaseRequest::new(2, [adult(2)]))
        .unwrap();

    assert_eq!(payments.calls().len(), 2);
    assert_eq!(
        reservations.calls(),
        vec![
            ReservationCall { account_id: account(1), seats: 1 },
            ReservationCall { account_id: account(2), seats: 2 },
        ]
    );
}
