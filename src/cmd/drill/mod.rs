// Copyright 2026 the quizdeck authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use chrono::Local;
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use tokio::spawn;

    use quizdeck_core::Fallible;

    use crate::cmd::drill::server::DrillMode;
    use crate::cmd::drill::server::ServerConfig;
    use crate::cmd::drill::server::start_server;
    use crate::helper::create_tmp_collection;
    use crate::helper::create_tmp_directory;
    use crate::helper::create_tmp_small_collection;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    fn make_config(mode: DrillMode, directory: String, port: u16) -> ServerConfig {
        ServerConfig {
            mode,
            directory: Some(directory),
            topic_filter: None,
            host: TEST_HOST.to_string(),
            port,
            session_started_at: Local::now().naive_local(),
        }
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = make_config(DrillMode::Quiz, "./derpherp".to_string(), port);
        let result = start_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_with_too_few_terms() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_small_collection()?;
        let config = make_config(DrillMode::Quiz, directory, port);
        // Too little material is an empty state: the server never starts.
        start_server(config).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_cards_with_empty_collection() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_directory()?.display().to_string();
        let config = make_config(DrillMode::Cards, directory, port);
        start_server(config).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_topic_filter() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_collection()?;
        let mut config = make_config(DrillMode::Quiz, directory, port);
        config.topic_filter = Some("derpherp".to_string());
        let result = start_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: no topic named 'derpherp'.");
        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_collection()?;
        let config = make_config(DrillMode::Quiz, directory, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        let url = format!("http://{TEST_HOST}:{port}/");
        let client = reqwest::Client::new();

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("{url}style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the `script.js` endpoint.
        let response = reqwest::get(format!("{url}script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        // Hit the not found endpoint.
        let response = reqwest::get(format!("{url}herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the file endpoint.
        let response = reqwest::get(format!("{url}file/foo.jpg")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "image/jpeg"
        );

        // Hit the file endpoint with a non-existent file.
        let response = reqwest::get(format!("{url}file/foo.png")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Walk the whole quiz, always picking "alpha". Exactly one question
        // has it as the answer, so the final score is 1 out of 4.
        let mut html = reqwest::get(&url).await?.text().await?;
        for step in 1..=4 {
            assert!(html.contains(&format!("Question {step} of 4")));
            let response = client
                .post(&url)
                .form(&[("action", "Select"), ("option", "alpha")])
                .send()
                .await?;
            assert!(response.status().is_success());
            let feedback = response.text().await?;
            assert!(feedback.contains("Next"));
            let response = client
                .post(&url)
                .form(&[("action", "Next")])
                .send()
                .await?;
            assert!(response.status().is_success());
            html = response.text().await?;
        }
        assert!(html.contains("Quiz Complete!"));
        assert!(html.contains("1 / 4"));

        // Try again: a fresh quiz starts over.
        let response = client
            .post(&url)
            .form(&[("action", "Restart")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Question 1 of 4"));
        assert!(html.contains("Score: 0"));

        // End the session.
        let response = client.post(&url).form(&[("action", "End")]).send().await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Session Complete"));

        Ok(())
    }

    #[tokio::test]
    async fn test_next_without_answer_is_ignored() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_collection()?;
        let config = make_config(DrillMode::Quiz, directory, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        let url = format!("http://{TEST_HOST}:{port}/");

        let response = reqwest::Client::new()
            .post(&url)
            .form(&[("action", "Next")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Question 1 of 4"));

        Ok(())
    }

    #[tokio::test]
    async fn test_end_without_finishing() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_collection()?;
        let config = make_config(DrillMode::Quiz, directory, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        let url = format!("http://{TEST_HOST}:{port}/");

        // Hit end.
        let response = reqwest::Client::new()
            .post(&url)
            .form(&[("action", "End")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Session Complete"));

        Ok(())
    }

    #[tokio::test]
    async fn test_cards_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_collection()?;
        let config = make_config(DrillMode::Cards, directory, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        let url = format!("http://{TEST_HOST}:{port}/");
        let client = reqwest::Client::new();

        // The first card shows the first term in the file.
        let html = reqwest::get(&url).await?.text().await?;
        assert!(html.contains("Card 1 of 4"));
        assert!(html.contains("alpha"));

        // Flip it over to see the definition.
        let response = client.post(&url).form(&[("action", "Flip")]).send().await?;
        let html = response.text().await?;
        assert!(html.contains("first letter"));
        assert!(html.contains("Show Term"));

        // Advancing turns the next card front side up.
        let response = client.post(&url).form(&[("action", "Next")]).send().await?;
        let html = response.text().await?;
        assert!(html.contains("Card 2 of 4"));
        assert!(html.contains("beta"));
        assert!(!html.contains("second letter"));

        // Three more advances wrap back around to the first card.
        for _ in 0..3 {
            client.post(&url).form(&[("action", "Next")]).send().await?;
        }
        let html = reqwest::get(&url).await?.text().await?;
        assert!(html.contains("Card 1 of 4"));
        assert!(html.contains("alpha"));

        // End the session.
        let response = client.post(&url).form(&[("action", "End")]).send().await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Session Complete"));

        Ok(())
    }
}
