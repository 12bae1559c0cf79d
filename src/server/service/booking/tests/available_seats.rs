use super::*;
use crate::server::{
    error::{booking::BookingError, Error},
    service::booking::BookingService,
};

/// Expect every seat of a train without tickets
#[tokio::test]
async fn returns_all_seats_for_empty_train() -> Result<(), TestError> {
    let test = booking_setup(5).await?;

    let booking_service = BookingService::new(&test.db);
    let seats = booking_service.available_seats(TRAIN).await.unwrap();

    assert_eq!(seats.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    Ok(())
}

/// Expect booked seats to be excluded in ascending order
#[tokio::test]
async fn excludes_booked_seats() -> Result<(), TestError> {
    let test = booking_setup(5).await?;

    let booking_service = BookingService::new(&test.db);
    for (seat, passport) in [("4", "111111"), ("2", "222222")] {
        booking_service
            .create_ticket(ticket_request(seat, passport))
            .await
            .unwrap();
    }

    let seats = booking_service.available_seats(TRAIN).await.unwrap();

    assert_eq!(seats.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);

    Ok(())
}

/// Expect only the requested train's tickets to count
#[tokio::test]
async fn ignores_other_trains() -> Result<(), TestError> {
    let test = booking_setup(3).await?;
    test.ticket().insert_mock_ticket("Ласточка", 3, 2).await?;

    let booking_service = BookingService::new(&test.db);
    let seats = booking_service.available_seats(TRAIN).await.unwrap();

    assert_eq!(seats.len(), 3);

    Ok(())
}

/// Expect an empty set once a train is fully booked
#[tokio::test]
async fn returns_empty_set_when_full() -> Result<(), TestError> {
    let test = booking_setup(2).await?;

    let booking_service = BookingService::new(&test.db);
    for (seat, passport) in [("1", "111111"), ("2", "222222")] {
        booking_service
            .create_ticket(ticket_request(seat, passport))
            .await
            .unwrap();
    }

    assert!(booking_service.available_seats(TRAIN).await.unwrap().is_empty());

    Ok(())
}

/// Expect ReferenceNotFound for an unknown train
#[tokio::test]
async fn fails_for_unknown_train() -> Result<(), TestError> {
    let test = booking_setup(2).await?;

    let booking_service = BookingService::new(&test.db);
    let result = booking_service.available_seats("Unknown").await;

    assert!(matches!(
        result,
        Err(Error::BookingError(BookingError::ReferenceNotFound { .. }))
    ));

    Ok(())
}
