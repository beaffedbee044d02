//! Registration flow: one scenario per client-side validation rule, plus the
//! happy path. Each invalid input must disable the Register button, paint the
//! offending field's border red, and render the exact feedback message.

use crate::common;
use qauto_suite::fixture::{SignUpFixture, with_resource};
use qauto_suite::pages::{SignUpField, assert_title_is, assert_url_contains};
use qauto_suite::test_data::{
    ERROR_BORDER_COLOR, EXPECTED_TITLE, VALID_PASSWORD, messages, unique_email,
};

#[tokio::test]
async fn successful_registration_of_a_new_user() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        fixture
            .form
            .enter_data_in_all_fields(
                "Test",
                "User",
                &unique_email(),
                VALID_PASSWORD,
                VALID_PASSWORD,
            )
            .await?;
        fixture.form.click_register_button().await?;

        fixture
            .form
            .verify_success_popup(messages::REGISTRATION_COMPLETE)
            .await?;
        assert_url_contains(&fixture.driver, "garage").await?;
        assert_title_is(&fixture.driver, EXPECTED_TITLE).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn empty_name_field() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.trigger_error_on(SignUpField::Name).await?;
        form.enter_last_name("User").await?;
        form.enter_email(&unique_email()).await?;
        form.enter_password(VALID_PASSWORD).await?;
        form.enter_repeat_password(VALID_PASSWORD).await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Name, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::NAME_REQUIRED).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn empty_last_name_field() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_name("Test").await?;
        form.trigger_error_on(SignUpField::LastName).await?;
        form.enter_email(&unique_email()).await?;
        form.enter_password(VALID_PASSWORD).await?;
        form.enter_repeat_password(VALID_PASSWORD).await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::LastName, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::LAST_NAME_REQUIRED).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn empty_email_field() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_name("Test").await?;
        form.enter_last_name("User").await?;
        form.trigger_error_on(SignUpField::Email).await?;
        form.enter_password(VALID_PASSWORD).await?;
        form.enter_repeat_password(VALID_PASSWORD).await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Email, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::EMAIL_REQUIRED).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn empty_password_field() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_name("Test").await?;
        form.enter_last_name("User").await?;
        form.enter_email(&unique_email()).await?;
        form.trigger_error_on(SignUpField::Password).await?;
        form.enter_repeat_password(VALID_PASSWORD).await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Password, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::PASSWORD_REQUIRED).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn empty_repeat_password_field() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_name("Test").await?;
        form.enter_last_name("User").await?;
        form.enter_email(&unique_email()).await?;
        form.enter_password(VALID_PASSWORD).await?;
        form.trigger_error_on(SignUpField::RepeatPassword).await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::RepeatPassword, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::REPEAT_PASSWORD_REQUIRED)
            .await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn non_latin_symbols_in_name_field() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            "Степан",
            "User",
            &unique_email(),
            VALID_PASSWORD,
            VALID_PASSWORD,
        )
        .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Name, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::NAME_INVALID).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn name_shorter_than_two_characters() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields("T", "User", &unique_email(), VALID_PASSWORD, VALID_PASSWORD)
            .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Name, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::NAME_LENGTH).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn name_longer_than_twenty_characters() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            &"AQA".repeat(7),
            "User",
            &unique_email(),
            VALID_PASSWORD,
            VALID_PASSWORD,
        )
        .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Name, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::NAME_LENGTH).await?;
        Ok(())
    })
    .await
}

// The application is expected to trim surrounding whitespace, but today it
// rejects padded names instead. Tracked as an expected failure so the defect
// stays visible; remove the ignore once the application trims input.
#[tokio::test]
#[ignore = "known Qauto defect: leading/trailing spaces in Name are not trimmed"]
async fn name_with_surrounding_spaces_registers_successfully() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        fixture
            .form
            .enter_data_in_all_fields(
                " Test ",
                "User",
                &unique_email(),
                VALID_PASSWORD,
                VALID_PASSWORD,
            )
            .await?;

        anyhow::ensure!(
            fixture.form.is_register_button_enabled().await?,
            "Register button is disabled: spaces are not ignored for the Name field"
        );
        fixture.form.click_register_button().await?;

        fixture
            .form
            .verify_success_popup(messages::REGISTRATION_COMPLETE)
            .await?;
        assert_url_contains(&fixture.driver, "garage").await?;
        assert_title_is(&fixture.driver, EXPECTED_TITLE).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn non_latin_symbols_in_last_name_field() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            "Test",
            "Мандарин",
            &unique_email(),
            VALID_PASSWORD,
            VALID_PASSWORD,
        )
        .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::LastName, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::LAST_NAME_INVALID).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn last_name_shorter_than_two_characters() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields("Test", "U", &unique_email(), VALID_PASSWORD, VALID_PASSWORD)
            .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::LastName, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::LAST_NAME_LENGTH).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn last_name_longer_than_twenty_characters() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            "Test",
            &"Use".repeat(7),
            &unique_email(),
            VALID_PASSWORD,
            VALID_PASSWORD,
        )
        .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::LastName, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::LAST_NAME_LENGTH).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
#[ignore = "known Qauto defect: leading/trailing spaces in Last name are not trimmed"]
async fn last_name_with_surrounding_spaces_registers_successfully() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        fixture
            .form
            .enter_data_in_all_fields(
                "Test",
                " User ",
                &unique_email(),
                VALID_PASSWORD,
                VALID_PASSWORD,
            )
            .await?;

        anyhow::ensure!(
            fixture.form.is_register_button_enabled().await?,
            "Register button is disabled: spaces are not ignored for the Last name field"
        );
        fixture.form.click_register_button().await?;

        fixture
            .form
            .verify_success_popup(messages::REGISTRATION_COMPLETE)
            .await?;
        assert_url_contains(&fixture.driver, "garage").await?;
        assert_title_is(&fixture.driver, EXPECTED_TITLE).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn incorrect_email() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields("Test", "User", "aqa@", VALID_PASSWORD, VALID_PASSWORD)
            .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Email, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::EMAIL_INCORRECT).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn password_shorter_than_eight_characters() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields("Test", "User", &unique_email(), "Pass1", VALID_PASSWORD)
            .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Password, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::PASSWORD_POLICY).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn password_longer_than_fifteen_characters() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            "Test",
            "User",
            &unique_email(),
            &"Pass1!".repeat(3),
            VALID_PASSWORD,
        )
        .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Password, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::PASSWORD_POLICY).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn password_without_a_capital_letter() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            "Test",
            "User",
            &unique_email(),
            "password55",
            VALID_PASSWORD,
        )
        .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Password, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::PASSWORD_POLICY).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn password_without_a_small_letter() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            "Test",
            "User",
            &unique_email(),
            "PASSWORD55",
            VALID_PASSWORD,
        )
        .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Password, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::PASSWORD_POLICY).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn password_without_an_integer() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields("Test", "User", &unique_email(), "Password", VALID_PASSWORD)
            .await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::Password, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::PASSWORD_POLICY).await?;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn passwords_do_not_match() -> anyhow::Result<()> {
    let settings = common::init();
    with_resource(&settings, |fixture: SignUpFixture| async move {
        let form = &fixture.form;
        form.enter_data_in_all_fields(
            "Test",
            "User",
            &unique_email(),
            VALID_PASSWORD,
            "TesterQA1!#",
        )
        .await?;
        form.blur_field(SignUpField::RepeatPassword).await?;

        form.verify_register_button_disabled().await?;
        form.verify_border_color(SignUpField::RepeatPassword, ERROR_BORDER_COLOR)
            .await?;
        form.verify_error_message(messages::PASSWORDS_DO_NOT_MATCH)
            .await?;
        Ok(())
    })
    .await
}
