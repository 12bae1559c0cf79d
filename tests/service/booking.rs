//! End-to-end booking scenarios over the public service API.

use sea_orm::{EntityTrait, PaginatorTrait};
use ticket_office::server::{
    error::{
        booking::{BookingError, ReferenceKind},
        Error,
    },
    model::{
        session::Principal,
        ticket::{PassengerIdentity, TicketRequest},
    },
    service::{booking::BookingService, export::ExportService},
};
use ticket_office_test_utils::prelude::*;

fn sapsan_request(seat_number: &str) -> TicketRequest {
    TicketRequest {
        train_name: "Сапсан".to_string(),
        departure_station_name: "Московский вокзал".to_string(),
        arrival_station_name: "Ленинградский вокзал".to_string(),
        seat_number: seat_number.to_string(),
        departure_time: test_departure_time(),
        arrival_time: test_arrival_time(),
        passenger: PassengerIdentity::new(
            "Ivan",
            "Ivanov",
            Some("Ivanovich"),
            "4510",
            "123456",
        )
        .unwrap(),
        cashier_id: None,
    }
}

/// Expect a seat to be freed by deletion and rebooked after a conflict
#[tokio::test]
async fn books_conflicts_and_frees_seat() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_train("Сапсан", 2)
        .with_station("Московский вокзал")
        .with_station("Ленинградский вокзал")
        .with_user("admin", true)
        .build()
        .await?;
    let admin = entity::prelude::User::find()
        .one(&test.db)
        .await?
        .map(|user| Principal::from(&user))
        .unwrap();

    let booking_service = BookingService::new(&test.db);

    let seats = booking_service.available_seats("Сапсан").await.unwrap();
    assert_eq!(seats.into_iter().collect::<Vec<_>>(), vec![1, 2]);

    let ticket = booking_service
        .create_ticket(sapsan_request("1"))
        .await
        .unwrap();
    let seats = booking_service.available_seats("Сапсан").await.unwrap();
    assert_eq!(seats.into_iter().collect::<Vec<_>>(), vec![2]);

    let result = booking_service.create_ticket(sapsan_request("1")).await;
    assert!(matches!(
        result,
        Err(Error::BookingError(BookingError::SeatConflict { seat_number: 1, .. }))
    ));

    booking_service.delete_ticket(&admin, ticket.id).await.unwrap();
    let seats = booking_service.available_seats("Сапсан").await.unwrap();
    assert_eq!(seats.into_iter().collect::<Vec<_>>(), vec![1, 2]);

    // The seat is bookable again once freed
    let rebooked = booking_service.create_ticket(sapsan_request("1")).await;
    assert!(rebooked.is_ok());

    let rows = ExportService::new(&test.db).ticket_rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].train_name, "Сапсан");

    Ok(())
}

/// Expect an unknown train to fail without persisting anything
#[tokio::test]
async fn unknown_train_persists_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_train("Сапсан", 2)
        .with_station("Московский вокзал")
        .with_station("Ленинградский вокзал")
        .build()
        .await?;

    let mut request = sapsan_request("1");
    request.train_name = "Unknown".to_string();

    let result = BookingService::new(&test.db).create_ticket(request).await;

    assert!(matches!(
        result,
        Err(Error::BookingError(BookingError::ReferenceNotFound {
            kind: ReferenceKind::Train,
            ref name,
        })) if name == "Unknown"
    ));
    assert_eq!(entity::prelude::Passenger::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Ticket::find().count(&test.db).await?, 0);

    Ok(())
}
